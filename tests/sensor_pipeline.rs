//! Host integration tests
//!
//! Drives both sensors through hand-written collaborators, the way a board
//! crate would wire them up.

use std::collections::VecDeque;

use motion_sense::WINDOW;
use motion_sense::devices::accelerometer::{Accelerometer, AccelerometerConfig};
use motion_sense::devices::calibration::calibrate_at_rest_default;
use motion_sense::devices::gyroscope::{Gyroscope, GyroscopeConfig, registers};
use motion_sense::devices::report::{format_calculated, write_calculated, write_raw};
use motion_sense::devices::traits::Sensor;
use motion_sense::platform::{AdcError, AdcInterface, I2cError, I2cInterface, PlatformError};

const EPSILON: f64 = 1e-9;

/// ADC that replays scripted (x, y, z) frames, holding the last one
struct ScriptedAdc {
    frames: VecDeque<[u16; 3]>,
    current: [u16; 3],
    channel: usize,
}

impl ScriptedAdc {
    fn new(frames: &[[u16; 3]]) -> Self {
        Self {
            frames: frames.iter().copied().collect(),
            current: [0; 3],
            channel: 0,
        }
    }
}

impl AdcInterface for ScriptedAdc {
    fn read_channel(&mut self, channel: u8) -> motion_sense::platform::Result<u16> {
        if channel > 2 {
            return Err(PlatformError::Adc(AdcError::InvalidChannel));
        }
        if self.channel == 0 {
            if let Some(frame) = self.frames.pop_front() {
                self.current = frame;
            }
        }
        self.channel = (self.channel + 1) % 3;
        Ok(self.current[channel as usize])
    }
}

/// ITG-3200 stand-in: register file plus a log of register accesses
struct FakeItg3200 {
    registers: [u8; 0x40],
    pointer: u8,
    writes: Vec<(u8, u8)>,
}

impl FakeItg3200 {
    const ADDRESS: u8 = 0x69;

    fn new() -> Self {
        let mut registers = [0u8; 0x40];
        registers[registers::WHO_AM_I as usize] = 0x69;
        Self {
            registers,
            pointer: 0,
            writes: Vec::new(),
        }
    }

    fn set_rates(&mut self, rates: [i16; 3]) {
        for ((high, low), rate) in registers::GYRO_OUT.into_iter().zip(rates) {
            let [h, l] = rate.to_be_bytes();
            self.registers[high as usize] = h;
            self.registers[low as usize] = l;
        }
    }
}

impl I2cInterface for FakeItg3200 {
    fn write(&mut self, addr: u8, data: &[u8]) -> motion_sense::platform::Result<()> {
        if addr != Self::ADDRESS {
            return Err(PlatformError::I2c(I2cError::Nack));
        }
        match data {
            &[reg, value] => {
                self.registers[reg as usize] = value;
                self.writes.push((reg, value));
            }
            &[reg] => self.pointer = reg,
            _ => {}
        }
        Ok(())
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> motion_sense::platform::Result<()> {
        if addr != Self::ADDRESS {
            return Err(PlatformError::I2c(I2cError::Nack));
        }
        for byte in buffer.iter_mut() {
            *byte = self.registers[self.pointer as usize];
            self.pointer += 1;
        }
        Ok(())
    }

    fn write_read(
        &mut self,
        addr: u8,
        write_data: &[u8],
        read_buffer: &mut [u8],
    ) -> motion_sense::platform::Result<()> {
        self.write(addr, write_data)?;
        self.read(addr, read_buffer)
    }
}

fn accelerometer_g(counts: f64) -> f64 {
    (counts * 3.30 / 1023.0 - 1.65) / 0.330
}

#[test]
fn test_accelerometer_end_to_end_matches_closed_form() {
    let adc = ScriptedAdc::new(&[[600, 600, 600]; WINDOW]);
    let mut acc = Accelerometer::new(adc, AccelerometerConfig::default()).unwrap();

    for _ in 0..WINDOW {
        acc.calculate();
    }

    let expected = accelerometer_g(600.0);
    let g = acc.calculated();
    assert_eq!(g.x, expected);
    assert_eq!(g.y, expected);
    assert_eq!(g.z, expected);
}

#[test]
fn test_accelerometer_tracks_a_step_through_the_window() {
    let mut frames = vec![[512, 512, 512]; WINDOW];
    frames.extend([[614, 512, 410]; WINDOW]);
    let adc = ScriptedAdc::new(&frames);
    let mut acc = Accelerometer::new(adc, AccelerometerConfig::default()).unwrap();

    for _ in 0..WINDOW {
        acc.calculate();
    }
    assert!((acc.calculated().x - accelerometer_g(512.0)).abs() < EPSILON);

    // Halfway through the step the average sits between the two levels
    for _ in 0..WINDOW / 2 {
        acc.calculate();
    }
    assert!((acc.averages().x - 563.0).abs() < EPSILON);
    assert!((acc.averages().z - 461.0).abs() < EPSILON);

    for _ in 0..WINDOW / 2 {
        acc.calculate();
    }
    assert!((acc.calculated().x - accelerometer_g(614.0)).abs() < EPSILON);
    assert!((acc.calculated().y - accelerometer_g(512.0)).abs() < EPSILON);
}

#[test]
fn test_gyroscope_bring_up_and_calibration() {
    let mut gyro = Gyroscope::new(FakeItg3200::new(), GyroscopeConfig::default()).unwrap();

    let id = gyro.who_am_i().unwrap();
    assert!(registers::is_itg3200(id));

    gyro.configure();

    gyro.i2c_mut().set_rates([1500, -40, 3]);
    let zero = calibrate_at_rest_default(&mut gyro);
    assert_eq!(zero.x, 1500.0);
    assert_eq!(zero.y, -40.0);

    gyro.calculate();
    assert!(gyro.calculated().x.abs() < EPSILON);

    // Turn at 10 °/s around X
    gyro.i2c_mut().set_rates([1500 + 144, -40, 3]);
    for _ in 0..WINDOW {
        gyro.calculate();
    }
    let dps = gyro.calculated();
    assert!((dps.x - 144.0 / 14.375).abs() < EPSILON);
    assert!(dps.y.abs() < EPSILON);

    let bus = gyro.release();
    assert_eq!(
        bus.writes,
        vec![(registers::DLPF_FS, 0x19), (registers::SMPLRT_DIV, 9)]
    );
}

#[test]
fn test_gyroscope_at_wrong_address_reads_zero() {
    let config = GyroscopeConfig {
        address: registers::ITG3200_ADDR,
        ..Default::default()
    };
    let mut bus = FakeItg3200::new();
    bus.set_rates([900, 900, 900]);
    let mut gyro = Gyroscope::new(bus, config).unwrap();

    assert!(gyro.who_am_i().is_err());
    for _ in 0..WINDOW {
        gyro.calculate();
    }
    assert_eq!(gyro.averages().x, 0.0);
}

#[test]
fn test_both_sensors_print_on_one_line() {
    let adc = ScriptedAdc::new(&[[600, 600, 600]]);
    let mut acc = Accelerometer::new(adc, AccelerometerConfig::default()).unwrap();
    let mut bus = FakeItg3200::new();
    bus.set_rates([115, 0, -115]);
    let mut gyro = Gyroscope::new(bus, GyroscopeConfig::default()).unwrap();

    let sensors: [&mut dyn Sensor; 2] = [&mut acc, &mut gyro];
    let mut line = String::new();
    for sensor in sensors {
        for _ in 0..WINDOW {
            sensor.calculate();
        }
        write_calculated(&mut line, &*sensor).unwrap();
        line.push('\t');
    }

    assert_eq!(line, "ACC =\t0.87\t0.87\t0.87\tGYR =\t8.00\t0.00\t-8.00\t");
}

#[test]
fn test_raw_output_and_fixed_buffer() {
    let adc = ScriptedAdc::new(&[[100, 200, 300]]);
    let mut acc = Accelerometer::new(adc, AccelerometerConfig::default()).unwrap();
    for _ in 0..WINDOW {
        acc.read_pins();
    }

    let mut out = String::new();
    write_raw(&mut out, &acc).unwrap();
    assert_eq!(out, "ACC =\t100.00\t200.00\t300.00");

    acc.calculate();
    let report = format_calculated(&acc);
    assert!(report.starts_with("ACC =\t"));
    assert_eq!(report.split('\t').count(), 4);
}
