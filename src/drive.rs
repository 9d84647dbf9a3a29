use crate::config::DriveConfig;

/// Arcade-style command: forward/back and rotation, each in [-1, 1].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DriveCommand {
    pub forward: f64,
    pub turn: f64,
}

impl DriveCommand {
    pub const fn new(forward: f64, turn: f64) -> Self {
        Self { forward, turn }
    }
}

/// Per-side speed fractions after mixing.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TankOutput {
    pub left: f64,
    pub right: f64,
}

impl TankOutput {
    pub fn voltages(self, max_voltage: f64) -> (f64, f64) {
        (self.left * max_voltage, self.right * max_voltage)
    }
}

fn apply_deadband(value: f64, deadband: f64) -> f64 {
    if libm::fabs(value) > deadband {
        if value > 0.0 {
            (value - deadband) / (1.0 - deadband)
        } else {
            (value + deadband) / (1.0 - deadband)
        }
    } else {
        0.0
    }
}

fn shape(value: f64, config: &DriveConfig) -> f64 {
    let v = apply_deadband(value.clamp(-1.0, 1.0), config.deadband);
    if config.square_inputs {
        libm::copysign(v * v, v)
    } else {
        v
    }
}

/// Mixes an arcade command into left/right track speeds.
///
/// The outer side runs at the larger of the two inputs and the inner side
/// gives up the difference.
pub fn arcade(command: DriveCommand, config: &DriveConfig) -> TankOutput {
    let x = shape(command.forward, config);
    let z = shape(command.turn, config);
    let max_input = libm::copysign(libm::fmax(libm::fabs(x), libm::fabs(z)), x);

    let (left, right) = match (x >= 0.0, z >= 0.0) {
        (true, true) => (max_input, x - z),
        (true, false) => (x + z, max_input),
        (false, true) => (x + z, max_input),
        (false, false) => (max_input, x - z),
    };
    TankOutput {
        left: left.clamp(-1.0, 1.0),
        right: right.clamp(-1.0, 1.0),
    }
}
