#[cfg(test)]
mod tests {
    use vision_core::config::SimConfig;
    use vision_core::enums::{DwellPhase, SmoothingMode};
    use vision_core::types::Position;

    use crate::dwell::{DwellParams, DwellTrigger};
    use crate::reticle::ReticleTracker;

    const DT: f64 = 1.0 / 60.0;

    fn reference_trigger() -> DwellTrigger {
        DwellTrigger::new(DwellParams::from(&SimConfig::default()))
    }

    /// Run `ticks` updates at a fixed aim, returning the number of fire events.
    fn hold(trigger: &mut DwellTrigger, aim: Position, ticks: usize) -> usize {
        (0..ticks).filter_map(|_| trigger.update(aim, DT)).count()
    }

    // ---- Reticle ----

    #[test]
    fn test_fast_reticle_tracks_pointer_directly() {
        let mut tracker = ReticleTracker::new(Position::ORIGIN, 0.1, SmoothingMode::PerTick);
        let state = tracker.update(Position::new(640.0, 360.0), DT);
        assert_eq!(state.fast, Position::new(640.0, 360.0));
        // Slow closes 10% of the gap.
        assert!((state.slow.x - 64.0).abs() < 1e-9);
        assert!((state.slow.y - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_slow_reticle_converges_monotonically() {
        let target = Position::new(500.0, -200.0);
        let mut tracker = ReticleTracker::new(Position::ORIGIN, 0.1, SmoothingMode::PerTick);

        let mut prev = Position::ORIGIN.distance_to(&target);
        let mut ticks = 0;
        while prev > 1e-3 {
            let state = tracker.update(target, DT);
            let dist = state.slow.distance_to(&state.fast);
            assert!(dist < prev, "distance must shrink every tick ({dist} >= {prev})");
            // No overshoot: slow stays on the origin side of the target.
            assert!(state.slow.x <= target.x && state.slow.y >= target.y);
            prev = dist;
            ticks += 1;
            assert!(ticks < 1000, "slow reticle failed to converge");
        }
    }

    #[test]
    fn test_per_tick_smoothing_ignores_dt() {
        let mut a = ReticleTracker::new(Position::ORIGIN, 0.1, SmoothingMode::PerTick);
        let mut b = ReticleTracker::new(Position::ORIGIN, 0.1, SmoothingMode::PerTick);
        let target = Position::new(100.0, 0.0);
        let sa = a.update(target, 1.0 / 120.0);
        let sb = b.update(target, 1.0 / 15.0);
        assert_eq!(sa.slow, sb.slow);
    }

    #[test]
    fn test_time_normalized_smoothing_matches_reference_rate() {
        let mode = SmoothingMode::TimeNormalized {
            reference_rate: 60.0,
        };
        let tracker = ReticleTracker::new(Position::ORIGIN, 0.1, mode);
        assert!((tracker.effective_factor(1.0 / 60.0) - 0.1).abs() < 1e-12);
        assert_eq!(tracker.effective_factor(0.0), 0.0);

        // Two half-steps land where one full step does.
        let mut coarse = ReticleTracker::new(Position::ORIGIN, 0.1, mode);
        let mut fine = ReticleTracker::new(Position::ORIGIN, 0.1, mode);
        let target = Position::new(300.0, 300.0);
        let c = coarse.update(target, 1.0 / 30.0);
        fine.update(target, 1.0 / 60.0);
        let f = fine.update(target, 1.0 / 60.0);
        assert!(c.slow.distance_to(&f.slow) < 1e-9);
    }

    #[test]
    fn test_smoothing_factor_one_has_no_lag() {
        let mut tracker = ReticleTracker::new(Position::ORIGIN, 1.0, SmoothingMode::PerTick);
        let state = tracker.update(Position::new(12.0, 34.0), DT);
        assert_eq!(state.slow, state.fast);
    }

    // ---- Dwell trigger ----

    #[test]
    fn test_first_tick_starts_dwelling() {
        let mut trigger = reference_trigger();
        assert_eq!(trigger.state().phase, DwellPhase::Idle);
        assert!(trigger.update(Position::new(10.0, 10.0), DT).is_none());
        assert_eq!(trigger.state().phase, DwellPhase::Dwelling);
        assert_eq!(trigger.state().dwell_start, Position::new(10.0, 10.0));
        assert_eq!(trigger.state().dwell_elapsed, 0.0);
    }

    #[test]
    fn test_reference_scenario_fires_once_at_tick_25() {
        let mut trigger = reference_trigger();
        let aim = Position::new(100.0, 100.0);

        for tick in 1..=24 {
            assert!(
                trigger.update(aim, DT).is_none(),
                "fired early at tick {tick}"
            );
        }
        let event = trigger.update(aim, DT).expect("tick 25 should fire");
        assert_eq!(event.position, aim);
        assert_eq!(trigger.state().last_fired, Some(aim));
        assert_eq!(trigger.state().phase, DwellPhase::Idle);

        // Tick 26: still on the fired spot, gated.
        assert!(trigger.update(aim, DT).is_none());
        assert_eq!(trigger.state().phase, DwellPhase::Cooldown);
    }

    #[test]
    fn test_fire_event_at_anchor_not_current_aim() {
        let mut trigger = reference_trigger();
        let anchor = Position::new(200.0, 200.0);
        trigger.update(anchor, DT);
        // Drift within tolerance while accumulating.
        let mut fired = None;
        for i in 0..30 {
            let aim = Position::new(200.0 + i as f64, 200.0);
            if let Some(event) = trigger.update(aim, DT) {
                fired = Some(event);
                break;
            }
        }
        assert_eq!(fired.expect("should fire").position, anchor);
    }

    #[test]
    fn test_movement_beyond_tolerance_cancels_progress() {
        let mut trigger = reference_trigger();
        let start = Position::new(100.0, 100.0);
        trigger.update(start, DT);
        trigger.update(start, 0.39);
        assert!((trigger.state().dwell_elapsed - 0.39).abs() < 1e-12);

        // This dt alone would complete the dwell, but the jump comes first.
        let jumped = Position::new(100.0, 181.0);
        assert!(trigger.update(jumped, 0.1).is_none());
        assert_eq!(trigger.state().phase, DwellPhase::Dwelling);
        assert_eq!(trigger.state().dwell_start, jumped);
        assert_eq!(trigger.state().dwell_elapsed, 0.0);
        assert!(trigger.state().last_fired.is_none());
    }

    #[test]
    fn test_movement_at_tolerance_keeps_progress() {
        let mut trigger = reference_trigger();
        let start = Position::new(0.0, 0.0);
        trigger.update(start, DT);
        trigger.update(Position::new(80.0, 0.0), 0.2);
        assert_eq!(trigger.state().dwell_start, start);
        assert!((trigger.state().dwell_elapsed - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_refire_gating_blocks_until_aim_leaves_threshold() {
        let mut trigger = reference_trigger();
        let p = Position::new(400.0, 300.0);
        assert_eq!(hold(&mut trigger, p, 25), 1);

        // Ten more seconds on the same spot: nothing.
        assert_eq!(hold(&mut trigger, p, 600), 0);
        assert_eq!(trigger.progress(), 0.0);

        // Exactly at the threshold is still inside the gate.
        let edge = Position::new(500.0, 300.0);
        assert_eq!(hold(&mut trigger, edge, 60), 0);
        assert_eq!(trigger.state().phase, DwellPhase::Cooldown);

        // Past the threshold a fresh dwell starts and completes.
        let away = Position::new(520.0, 300.0);
        assert_eq!(hold(&mut trigger, away, 25), 1);
        assert_eq!(trigger.state().last_fired, Some(away));
    }

    #[test]
    fn test_returning_to_gate_interrupts_dwell() {
        let mut trigger = reference_trigger();
        let p = Position::new(0.0, 0.0);
        hold(&mut trigger, p, 25);

        let away = Position::new(150.0, 0.0);
        hold(&mut trigger, away, 10);
        assert_eq!(trigger.state().phase, DwellPhase::Dwelling);

        // Back inside the refire radius: progress is dropped.
        trigger.update(Position::new(90.0, 0.0), DT);
        assert_eq!(trigger.state().phase, DwellPhase::Cooldown);
        assert_eq!(trigger.state().dwell_elapsed, 0.0);
    }

    #[test]
    fn test_progress_reports_fraction() {
        let mut trigger = reference_trigger();
        let aim = Position::new(1.0, 1.0);
        trigger.update(aim, DT);
        trigger.update(aim, 0.1);
        assert!((trigger.progress() - 0.25).abs() < 1e-12);
        trigger.reset();
        assert_eq!(trigger.progress(), 0.0);
        assert_eq!(trigger.state().phase, DwellPhase::Idle);
    }

    #[test]
    fn test_large_single_step_fires_after_dwell_starts() {
        let mut trigger = reference_trigger();
        let aim = Position::new(5.0, 5.0);
        // The first tick only anchors, whatever its dt.
        assert!(trigger.update(aim, 1.0).is_none());
        assert!(trigger.update(aim, 1.0).is_some());
    }
}
