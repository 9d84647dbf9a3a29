use alloc::string::ToString;
use core::time::Duration;

use crate::error::ConfigError;

/// Timeline and thresholds for the autonomous routine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SequencerConfig {
    /// Driving stops here at the latest; the firing window opens here.
    pub drive_end: Duration,
    /// Firing window closes.
    pub fire_end: Duration,
    /// Nothing runs after this.
    pub sequence_end: Duration,
    /// Encoder reading at which the target counts as reached. Readings go
    /// negative as the robot advances.
    pub distance_limit: f64,
    /// Drive command while creeping to the target. Negative is forward.
    pub creep_speed: f64,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            drive_end: Duration::from_secs(6),
            fire_end: Duration::from_secs(8),
            sequence_end: Duration::from_secs(10),
            distance_limit: -69.9 * 25.0,
            creep_speed: -0.6,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TeleopConfig {
    /// Forward axis multiplier while the precision button is held.
    pub precision_scale: f64,
}

impl Default for TeleopConfig {
    fn default() -> Self {
        Self {
            precision_scale: 0.6,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DriveConfig {
    pub deadband: f64,
    pub square_inputs: bool,
    pub max_voltage: f64,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            deadband: 0.02,
            square_inputs: true,
            max_voltage: 12.0,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RobotConfig {
    pub sequencer: SequencerConfig,
    pub teleop: TeleopConfig,
    pub drive: DriveConfig,
}

fn parse_number(line: usize, key: &str, value: &str) -> Result<f64, ConfigError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigError::InvalidNumber {
            line,
            key: key.to_string(),
            value: value.to_string(),
        })
}

fn parse_seconds(line: usize, key: &str, value: &str) -> Result<Duration, ConfigError> {
    let secs = parse_number(line, key, value)?;
    Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidNumber {
        line,
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_bool(line: usize, key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            line,
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

impl RobotConfig {
    /// Applies `key = value` overrides on top of `self`.
    ///
    /// Blank lines and `#` comments are skipped. Fails on the first bad line, or
    /// if the resulting autonomous timeline is out of order.
    pub fn apply_overrides(mut self, text: &str) -> Result<Self, ConfigError> {
        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let content = raw.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }
            let (key, value) = content
                .split_once('=')
                .ok_or(ConfigError::MissingSeparator { line })?;
            let (key, value) = (key.trim(), value.trim());
            match key {
                "auton.drive_end" => self.sequencer.drive_end = parse_seconds(line, key, value)?,
                "auton.fire_end" => self.sequencer.fire_end = parse_seconds(line, key, value)?,
                "auton.sequence_end" => {
                    self.sequencer.sequence_end = parse_seconds(line, key, value)?
                }
                "auton.distance_limit" => {
                    self.sequencer.distance_limit = parse_number(line, key, value)?
                }
                "auton.creep_speed" => self.sequencer.creep_speed = parse_number(line, key, value)?,
                "teleop.precision_scale" => {
                    self.teleop.precision_scale = parse_number(line, key, value)?
                }
                "drive.deadband" => self.drive.deadband = parse_number(line, key, value)?,
                "drive.square_inputs" => self.drive.square_inputs = parse_bool(line, key, value)?,
                "drive.max_voltage" => self.drive.max_voltage = parse_number(line, key, value)?,
                _ => {
                    return Err(ConfigError::UnknownKey {
                        line,
                        key: key.to_string(),
                    });
                }
            }
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.sequencer;
        if s.drive_end <= s.fire_end && s.fire_end <= s.sequence_end {
            Ok(())
        } else {
            Err(ConfigError::Timeline)
        }
    }
}
