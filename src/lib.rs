//! Control core for a differential-drive robot with a shooter.
//!
//! Everything here is pure per-tick logic over snapshotted inputs so it runs the
//! same on the V5 brain and on a development host. The firmware in `main.rs`
//! wires it to vexide devices.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod alliance;
pub mod autonomous;
pub mod config;
pub mod drive;
pub mod error;
pub mod io;
pub mod robot;
pub mod teleop;

pub use alliance::AllianceCode;
pub use autonomous::{AutonPhase, AutonomousSequencer, SensorSnapshot};
pub use config::{DriveConfig, RobotConfig, SequencerConfig, TeleopConfig};
pub use drive::{DriveCommand, TankOutput};
pub use error::ConfigError;
pub use robot::RobotCore;
pub use teleop::{InputState, TeleopController};

/// One tick's worth of output: what the drive and the shooter should do.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Outputs {
    pub drive: DriveCommand,
    pub shooter: f64,
}
