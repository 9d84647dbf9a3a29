#![no_main]
#![no_std]
extern crate alloc;
use alloc::string::{String, ToString};
use core::time::Duration;

use log::LevelFilter;
use shooter_bot::{RobotConfig, RobotCore};
use vexide::{fs, prelude::*};

use crate::hardware::Hardware;

mod hardware;
mod logger;

const CONFIG_PATH: &str = "robot.cfg";
const ALLIANCE_PATH: &str = "alliance.txt";
const PERIOD: Duration = Duration::from_millis(20);

fn load_config() -> RobotConfig {
    let Ok(text) = fs::read_to_string(CONFIG_PATH) else {
        log::info!("no {}, using defaults", CONFIG_PATH);
        return RobotConfig::default();
    };
    match RobotConfig::default().apply_overrides(&text) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}: {}, using defaults", CONFIG_PATH, e);
            RobotConfig::default()
        }
    }
}

fn load_alliance() -> String {
    fs::read_to_string(ALLIANCE_PATH)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

#[vexide::main]
async fn main(peripherals: Peripherals) {
    logger::init(LevelFilter::Info);
    let mut peripherals = DynamicPeripherals::new(peripherals);
    let config = load_config();

    let hardware = Hardware::new(
        peripherals.take_primary_controller().expect("primary controller"),
        [
            Motor::new(peripherals.take_smart_port(1).expect("smart port 1"), Gearset::Green, Direction::Forward),
            Motor::new(peripherals.take_smart_port(2).expect("smart port 2"), Gearset::Green, Direction::Forward),
        ],
        [
            Motor::new(peripherals.take_smart_port(3).expect("smart port 3"), Gearset::Green, Direction::Reverse),
            Motor::new(peripherals.take_smart_port(4).expect("smart port 4"), Gearset::Green, Direction::Reverse),
        ],
        [
            Motor::new(peripherals.take_smart_port(6).expect("smart port 6"), Gearset::Blue, Direction::Forward),
            Motor::new(peripherals.take_smart_port(7).expect("smart port 7"), Gearset::Blue, Direction::Reverse),
        ],
        // Both encoders count down while driving toward the target.
        RotationSensor::new(peripherals.take_smart_port(10).expect("smart port 10"), Direction::Reverse),
        RotationSensor::new(peripherals.take_smart_port(11).expect("smart port 11"), Direction::Reverse),
        config.drive.max_voltage,
    );

    Robot {
        core: RobotCore::new(config),
        hardware,
    }
    .compete()
    .await;
}

pub struct Robot {
    core: RobotCore,
    hardware: Hardware,
}

impl Compete for Robot {
    async fn disabled(&mut self) {
        self.hardware.stop();
    }

    async fn autonomous(&mut self) {
        self.hardware.start_autonomous(load_alliance());
        self.core.on_autonomous_start();
        loop {
            self.core.autonomous_periodic(&mut self.hardware);
            sleep(PERIOD).await;
        }
    }

    async fn driver(&mut self) {
        loop {
            self.core.teleop_periodic(&mut self.hardware);
            sleep(PERIOD).await;
        }
    }
}
