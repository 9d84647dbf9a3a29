use crate::{
    Outputs,
    alliance::AllianceCode,
    autonomous::{AutonomousSequencer, SensorSnapshot},
    config::RobotConfig,
    drive,
    io::{Actuators, AutonSensors, DriverInput},
    teleop::TeleopController,
};

/// Both period controllers plus the glue that reads inputs once per tick and
/// writes the result out.
#[derive(Clone, Debug)]
pub struct RobotCore {
    config: RobotConfig,
    auton: AutonomousSequencer,
    teleop: TeleopController,
    alliance: Option<AllianceCode>,
}

impl RobotCore {
    pub fn new(config: RobotConfig) -> Self {
        Self {
            config,
            auton: AutonomousSequencer::new(config.sequencer),
            teleop: TeleopController::new(config.teleop),
            alliance: None,
        }
    }

    pub fn config(&self) -> &RobotConfig {
        &self.config
    }

    pub fn autonomous(&self) -> &AutonomousSequencer {
        &self.auton
    }

    /// Must run before the first autonomous tick of every match.
    pub fn on_autonomous_start(&mut self) {
        self.auton.reset();
        self.alliance = None;
        log::info!("auton: start");
    }

    pub fn autonomous_periodic<H: AutonSensors + Actuators>(&mut self, io: &mut H) -> Outputs {
        let snapshot = SensorSnapshot {
            elapsed: io.elapsed(),
            distance: io.encoder_a(),
            alliance: AllianceCode::parse(io.alliance_data()),
        };
        let encoder_b = io.encoder_b();
        log::debug!("A {:.1} B {:.1}", snapshot.distance, encoder_b);

        if self.alliance != Some(snapshot.alliance) {
            log::info!(
                "auton: alliance {} (shooter {})",
                snapshot.alliance.as_str(),
                if snapshot.alliance.shooter_enabled() { "enabled" } else { "disabled" }
            );
            self.alliance = Some(snapshot.alliance);
        }

        let outputs = self.auton.tick(snapshot);
        self.write(io, outputs);
        outputs
    }

    pub fn teleop_periodic<H: DriverInput + Actuators>(&mut self, io: &mut H) -> Outputs {
        let input = io.input_state();
        log::debug!("throttle {:.2}", input.throttle);
        let outputs = self.teleop.tick(&input);
        self.write(io, outputs);
        outputs
    }

    fn write<A: Actuators>(&self, io: &mut A, outputs: Outputs) {
        io.set_drive(drive::arcade(outputs.drive, &self.config.drive));
        io.set_shooter(outputs.shooter);
    }
}
