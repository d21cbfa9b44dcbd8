//! Stand-in for a human operator: points at the most urgent threat.

use vision_core::state::{SimSnapshot, ThreatView};
use vision_core::types::Position;

/// The threat closest to the ground, ties broken by id.
pub fn most_urgent(snapshot: &SimSnapshot) -> Option<&ThreatView> {
    snapshot
        .threats
        .iter()
        .min_by(|a, b| a.position.y.total_cmp(&b.position.y).then(a.id.cmp(&b.id)))
}

/// Pointer sample for this frame, or `None` (pointer off view) when nothing is inbound.
pub fn aim(snapshot: &SimSnapshot) -> Option<Position> {
    most_urgent(snapshot).map(|threat| threat.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vision_core::components::ThreatId;
    use vision_core::types::Velocity;

    fn view(id: u32, y: f64) -> ThreatView {
        ThreatView {
            id: ThreatId(id),
            tag: "red".into(),
            position: Position::new(100.0 * id as f64, y),
            velocity: Velocity::new(0.0, -80.0),
            trail: Vec::new(),
        }
    }

    #[test]
    fn test_aims_at_lowest_threat() {
        let snapshot = SimSnapshot {
            threats: vec![view(0, 700.0), view(1, 200.0), view(2, 900.0)],
            ..SimSnapshot::default()
        };
        assert_eq!(most_urgent(&snapshot).map(|t| t.id), Some(ThreatId(1)));
        assert_eq!(aim(&snapshot), Some(Position::new(100.0, 200.0)));
    }

    #[test]
    fn test_tie_prefers_older_threat() {
        let snapshot = SimSnapshot {
            threats: vec![view(3, 400.0), view(2, 400.0)],
            ..SimSnapshot::default()
        };
        assert_eq!(most_urgent(&snapshot).map(|t| t.id), Some(ThreatId(2)));
    }

    #[test]
    fn test_no_threats_releases_pointer() {
        assert_eq!(aim(&SimSnapshot::default()), None);
    }
}
