use core::time::Duration;

use crate::{
    Outputs, alliance::AllianceCode, config::SequencerConfig, drive::DriveCommand,
};

/// Inputs read once at the top of an autonomous tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SensorSnapshot {
    pub elapsed: Duration,
    /// Encoder A. Goes negative as the robot drives toward the target.
    pub distance: f64,
    pub alliance: AllianceCode,
}

/// Where on the timeline the routine is, for logging.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AutonPhase {
    Driving,
    Waiting,
    Firing,
    Holding,
    Finished,
}

/// Set once, cleared only by rebuilding the owner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct Latch(bool);

impl Latch {
    fn set(&mut self) {
        self.0 = true;
    }

    fn is_set(self) -> bool {
        self.0
    }
}

/// Shooter direction for a point on the timeline, before the alliance gate.
///
/// The firing window needs the target latch. Without it the window falls
/// through to the idle arm like any other time after the drive.
pub fn shooter_timeline(config: &SequencerConfig, elapsed: Duration, reached_target: bool) -> f64 {
    match elapsed {
        t if t < config.drive_end => 0.0,
        t if t < config.fire_end && reached_target => 1.0,
        t if t < config.sequence_end => 0.0,
        _ => 0.0,
    }
}

/// Drive to the target, stop, then fire for a fixed window if we got there and
/// the field layout favors us.
#[derive(Clone, Debug)]
pub struct AutonomousSequencer {
    config: SequencerConfig,
    reached_target: Latch,
    drive_speed: f64,
    shooter_speed: f64,
    shooter_enabled: bool,
    phase: Option<AutonPhase>,
}

impl AutonomousSequencer {
    pub fn new(config: SequencerConfig) -> Self {
        Self {
            config,
            reached_target: Latch::default(),
            drive_speed: 0.0,
            shooter_speed: 0.0,
            shooter_enabled: false,
            phase: None,
        }
    }

    /// Forget everything from the previous run. Call on autonomous entry.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    pub fn reached_target(&self) -> bool {
        self.reached_target.is_set()
    }

    pub fn shooter_enabled(&self) -> bool {
        self.shooter_enabled
    }

    /// Phase of the last tick, `None` before the first one.
    pub fn phase(&self) -> Option<AutonPhase> {
        self.phase
    }

    pub fn tick(&mut self, input: SensorSnapshot) -> Outputs {
        self.update_drive(input.elapsed, input.distance);
        self.shooter_speed = shooter_timeline(&self.config, input.elapsed, self.reached_target());
        self.shooter_enabled = input.alliance.shooter_enabled();

        let phase = self.classify(input.elapsed);
        if self.phase != Some(phase) {
            log::info!(
                "auton: {:?} at {:.2}s (distance {:.1}, target reached {})",
                phase,
                input.elapsed.as_secs_f64(),
                input.distance,
                self.reached_target()
            );
            self.phase = Some(phase);
        }

        Outputs {
            drive: DriveCommand::new(self.drive_speed, 0.0),
            shooter: self.shooter_speed * input.alliance.gate(),
        }
    }

    fn update_drive(&mut self, elapsed: Duration, distance: f64) {
        let driving = elapsed < self.config.drive_end && distance > self.config.distance_limit;
        if driving {
            self.drive_speed = self.config.creep_speed;
        } else {
            self.drive_speed = 0.0;
            self.reached_target.set();
        }
    }

    fn classify(&self, elapsed: Duration) -> AutonPhase {
        let c = &self.config;
        if self.drive_speed != 0.0 {
            AutonPhase::Driving
        } else if elapsed < c.drive_end {
            AutonPhase::Waiting
        } else if elapsed < c.fire_end && self.shooter_speed != 0.0 {
            AutonPhase::Firing
        } else if elapsed < c.sequence_end {
            AutonPhase::Holding
        } else {
            AutonPhase::Finished
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn limit() -> f64 {
        SequencerConfig::default().distance_limit
    }

    fn snapshot(secs: f64, distance: f64, alliance: &str) -> SensorSnapshot {
        SensorSnapshot {
            elapsed: Duration::from_secs_f64(secs),
            distance,
            alliance: AllianceCode::parse(alliance),
        }
    }

    fn seq() -> AutonomousSequencer {
        AutonomousSequencer::new(SequencerConfig::default())
    }

    /// Drives past the threshold before the firing window so the latch is set.
    fn latched() -> AutonomousSequencer {
        let mut s = seq();
        s.tick(snapshot(3.0, limit() - 1.0, "RRR"));
        assert!(s.reached_target());
        s
    }

    #[test]
    fn creeps_forward_at_start() {
        let mut s = seq();
        let out = s.tick(snapshot(0.0, 0.0, "RRR"));
        assert_eq!(out.drive.forward, -0.6);
        assert_eq!(out.drive.turn, 0.0);
        assert_eq!(out.shooter, 0.0);
        assert!(!s.reached_target());
        assert_eq!(s.phase(), Some(AutonPhase::Driving));
    }

    #[test]
    fn stops_when_threshold_crossed_before_timeout() {
        let mut s = seq();
        let out = s.tick(snapshot(5.9, limit() - 1.0, "RRR"));
        assert_eq!(out.drive.forward, 0.0);
        assert!(s.reached_target());
        assert_eq!(s.phase(), Some(AutonPhase::Waiting));
    }

    #[test]
    fn threshold_is_strict() {
        let mut s = seq();
        let out = s.tick(snapshot(1.0, limit(), "RRR"));
        assert_eq!(out.drive.forward, 0.0);
        assert!(s.reached_target());
    }

    #[test]
    fn timeout_stops_a_stalled_robot_and_latches() {
        let mut s = seq();
        s.tick(snapshot(5.98, -10.0, "RRR"));
        assert!(!s.reached_target());
        let out = s.tick(snapshot(6.0, -10.0, "RRR"));
        assert_eq!(out.drive.forward, 0.0);
        assert!(s.reached_target());
    }

    #[test]
    fn fires_in_window_when_latched_and_favored() {
        let mut s = latched();
        let out = s.tick(snapshot(7.0, limit() - 1.0, "RRR"));
        assert_eq!(out.shooter, 1.0);
        assert_eq!(s.phase(), Some(AutonPhase::Firing));
    }

    #[test]
    fn window_requires_the_latch() {
        let cfg = SequencerConfig::default();
        let at = Duration::from_secs(7);
        assert_eq!(shooter_timeline(&cfg, at, true) * AllianceCode::Rrr.gate(), 1.0);
        assert_eq!(shooter_timeline(&cfg, at, false) * AllianceCode::Rrr.gate(), 0.0);
    }

    #[test]
    fn timeline_is_idle_outside_window() {
        let cfg = SequencerConfig::default();
        for (secs, reached) in [(0.0, true), (5.99, true), (8.0, true), (9.5, true), (10.0, true), (30.0, false)] {
            assert_eq!(shooter_timeline(&cfg, Duration::from_secs_f64(secs), reached), 0.0);
        }
    }

    #[test]
    fn first_tick_in_window_latches_before_firing() {
        // Drive is evaluated first, so a robot that never got there is still
        // latched by the time the window is checked.
        let mut s = seq();
        let out = s.tick(snapshot(7.0, -10.0, "RRR"));
        assert!(s.reached_target());
        assert_eq!(out.shooter, 1.0);
    }

    #[test]
    fn unfavorable_code_blocks_shooter() {
        let mut s = latched();
        let out = s.tick(snapshot(7.0, limit() - 1.0, "LLL"));
        assert_eq!(out.shooter, 0.0);
        assert!(!s.shooter_enabled());
    }

    #[test]
    fn unknown_code_fails_closed() {
        let mut s = latched();
        for secs in [3.5, 6.0, 7.0, 7.99, 9.0, 12.0] {
            let out = s.tick(snapshot(secs, limit() - 1.0, "XYZ"));
            assert_eq!(out.shooter, 0.0, "at {secs}s");
        }
    }

    #[test]
    fn window_closes_at_fire_end() {
        let mut s = latched();
        assert_eq!(s.tick(snapshot(7.99, limit() - 1.0, "RLR")).shooter, 1.0);
        assert_eq!(s.tick(snapshot(8.0, limit() - 1.0, "RLR")).shooter, 0.0);
        assert_eq!(s.phase(), Some(AutonPhase::Holding));
        assert_eq!(s.tick(snapshot(10.0, limit() - 1.0, "RLR")).shooter, 0.0);
        assert_eq!(s.phase(), Some(AutonPhase::Finished));
    }

    #[test]
    fn sensor_noise_does_not_clear_latch() {
        let mut s = latched();
        let out = s.tick(snapshot(4.0, 0.0, "RRR"));
        // Back above the threshold and still inside the drive window, so the
        // drive resumes for this tick, but the latch holds.
        assert_eq!(out.drive.forward, -0.6);
        assert!(s.reached_target());
    }

    #[test]
    fn reset_clears_latch() {
        let mut s = latched();
        s.reset();
        assert!(!s.reached_target());
        assert_eq!(s.phase(), None);
        assert_eq!(s.config(), &SequencerConfig::default());
    }

    proptest! {
        #[test]
        fn nothing_fires_after_sequence_end(
            secs in 10.0f64..200.0,
            distance in -5000.0f64..5000.0,
            pre_latch in any::<bool>(),
        ) {
            let mut s = if pre_latch { latched() } else { seq() };
            let out = s.tick(snapshot(secs, distance, "RRR"));
            prop_assert_eq!(out.shooter, 0.0);
            prop_assert_eq!(out.drive.forward, 0.0);
        }

        #[test]
        fn drive_window_follows_threshold(
            secs in 0.0f64..5.99,
            distance in -5000.0f64..5000.0,
        ) {
            let mut s = seq();
            let out = s.tick(snapshot(secs, distance, "RRR"));
            let should_drive = distance > limit();
            prop_assert_eq!(out.drive.forward != 0.0, should_drive);
            prop_assert_eq!(s.reached_target(), !should_drive);
        }

        #[test]
        fn latch_survives_any_later_ticks(
            later in proptest::collection::vec((0.0f64..15.0, -5000.0f64..5000.0), 1..40),
        ) {
            let mut s = latched();
            for (secs, distance) in later {
                s.tick(snapshot(secs, distance, "RRR"));
                prop_assert!(s.reached_target());
            }
        }
    }
}
