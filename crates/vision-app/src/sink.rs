//! Render sink for the headless host: reports notifications as log lines.

use vision_aim::dwell::DwellState;
use vision_aim::reticle::ReticleState;
use vision_core::components::ThreatId;
use vision_core::enums::DwellPhase;
use vision_core::events::FireEvent;
use vision_sim::interfaces::RenderSink;
use vision_sim::threat::Threat;

/// Logs fire and threat lifecycle notifications; keeps simple tallies.
#[derive(Debug, Default)]
pub struct LogSink {
    pub shots: u32,
    pub spawned: u32,
    pub expired: u32,
    last_phase: DwellPhase,
}

impl RenderSink for LogSink {
    fn reticle(&mut self, reticle: &ReticleState, dwell: &DwellState) {
        if dwell.phase != self.last_phase {
            tracing::trace!(
                phase = ?dwell.phase,
                x = reticle.slow.x,
                y = reticle.slow.y,
                "dwell phase changed"
            );
            self.last_phase = dwell.phase;
        }
    }

    fn fired(&mut self, event: &FireEvent) {
        self.shots += 1;
        tracing::info!(x = event.position.x, y = event.position.y, "fire");
    }

    fn threat_spawned(&mut self, id: ThreatId, threat: &Threat) {
        self.spawned += 1;
        tracing::info!(
            %id,
            tag = %threat.spec().tag,
            x = threat.position().x,
            eta_secs = ?threat.time_to_expiry(),
            "inbound"
        );
    }

    fn threat_expired(&mut self, id: ThreatId, threat: &Threat) {
        self.expired += 1;
        tracing::warn!(%id, x = threat.position().x, "threat reached the ground");
    }
}
