extern crate alloc;
use alloc::string::String;
use core::time::Duration;

use shooter_bot::{
    InputState, TankOutput,
    io::{Actuators, AutonSensors, DriverInput},
};
use vexide::{prelude::*, time::Instant};

pub struct Hardware {
    pub controller: Controller,
    pub left_motors: [Motor; 2],
    pub right_motors: [Motor; 2],
    pub shooter_motors: [Motor; 2],
    pub encoder_a: RotationSensor,
    pub encoder_b: RotationSensor,
    pub max_voltage: f64,
    auton_start: Instant,
    alliance: String,
}

impl Hardware {
    pub fn new(
        controller: Controller,
        left_motors: [Motor; 2],
        right_motors: [Motor; 2],
        shooter_motors: [Motor; 2],
        encoder_a: RotationSensor,
        encoder_b: RotationSensor,
        max_voltage: f64,
    ) -> Self {
        Self {
            controller,
            left_motors,
            right_motors,
            shooter_motors,
            encoder_a,
            encoder_b,
            max_voltage,
            auton_start: Instant::now(),
            alliance: String::new(),
        }
    }

    /// Zero the encoders and the clock, and take the field layout for this match.
    pub fn start_autonomous(&mut self, alliance: String) {
        let _ = self.encoder_a.reset_position();
        let _ = self.encoder_b.reset_position();
        self.alliance = alliance;
        self.auton_start = Instant::now();
    }

    pub fn stop(&mut self) {
        self.set_drive(TankOutput::default());
        self.set_shooter(0.0);
    }
}

fn set_voltage_all(motors: &mut [Motor], volts: f64) {
    for m in motors.iter_mut() {
        if let Err(e) = m.set_voltage(volts) {
            log::debug!("motor write failed: {:?}", e);
        }
    }
}

impl AutonSensors for Hardware {
    fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.auton_start)
    }

    fn encoder_a(&mut self) -> f64 {
        self.encoder_a.position().unwrap_or_default().as_degrees()
    }

    fn encoder_b(&mut self) -> f64 {
        self.encoder_b.position().unwrap_or_default().as_degrees()
    }

    fn alliance_data(&self) -> &str {
        &self.alliance
    }
}

impl DriverInput for Hardware {
    fn input_state(&mut self) -> InputState {
        let state = self.controller.state().unwrap_or_default();
        // Sticks are flipped to joystick convention (pushed away reads
        // negative) since the drive direction factor assumes it.
        InputState {
            forward: -state.left_stick.y(),
            turn: state.left_stick.x(),
            throttle: -state.right_stick.y(),
            shooter_a: state.button_r1.is_pressed(),
            shooter_b: state.button_l1.is_pressed(),
            shooter_c: state.button_r2.is_pressed(),
            flip_direction: state.button_b.is_pressed(),
            precision: state.button_l2.is_pressed(),
        }
    }
}

impl Actuators for Hardware {
    fn set_drive(&mut self, output: TankOutput) {
        let (left, right) = output.voltages(self.max_voltage);
        set_voltage_all(&mut self.left_motors, left);
        set_voltage_all(&mut self.right_motors, right);
    }

    fn set_shooter(&mut self, speed: f64) {
        let volts = speed.clamp(-1.0, 1.0) * self.max_voltage;
        set_voltage_all(&mut self.shooter_motors, volts);
    }
}
