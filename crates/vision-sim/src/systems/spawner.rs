//! Threat spawning system: one new threat every spawn interval.

use hecs::World;

use vision_core::components::{ThreatId, ThreatSpec};
use vision_core::config::{PlayArea, SimConfig};
use vision_core::events::SimEvent;
use vision_core::types::Position;

use crate::interfaces::RenderSink;
use crate::random::RandomSource;
use crate::threat::Threat;

/// Periodically creates threats with a random type, origin and target.
#[derive(Debug, Clone)]
pub struct ThreatSpawner {
    catalog: Vec<ThreatSpec>,
    play_area: PlayArea,
    margin: f64,
    interval: f64,
    max_trail_length: usize,
    spawn_on_start: bool,
    /// Seconds accumulated since the last spawn.
    timer: f64,
}

impl ThreatSpawner {
    pub fn from_config(config: &SimConfig) -> Self {
        let mut spawner = Self {
            catalog: config.missile_catalog.clone(),
            play_area: config.play_area,
            margin: config.spawn_margin,
            interval: config.spawn_interval,
            max_trail_length: config.max_trail_length,
            spawn_on_start: config.spawn_on_start,
            timer: 0.0,
        };
        spawner.reset();
        spawner
    }

    /// Accumulate `dt`; once the interval is reached, build one threat and
    /// zero the timer. A long stall never yields more than one threat.
    pub fn update(&mut self, dt: f64, rng: &mut impl RandomSource) -> Option<Threat> {
        self.timer += dt;
        if self.timer < self.interval {
            return None;
        }
        self.timer = 0.0;
        Some(self.build_threat(rng))
    }

    pub fn timer(&self) -> f64 {
        self.timer
    }

    /// Rewind the timer to its start-of-run value.
    pub fn reset(&mut self) {
        self.timer = if self.spawn_on_start { self.interval } else { 0.0 };
    }

    fn build_threat(&self, rng: &mut impl RandomSource) -> Threat {
        let lo = self.margin;
        let hi = self.play_area.width - self.margin;
        let spawn = Position::new(rng.uniform(lo, hi), self.play_area.height);
        let target = Position::new(rng.uniform(lo, hi), 0.0);
        let spec = self.catalog[rng.pick_index(self.catalog.len())].clone();
        Threat::new(spec, spawn, target, self.max_trail_length)
    }
}

/// Run the spawner for one tick, adding any new threat to the world.
pub fn run<S: RenderSink + ?Sized>(
    world: &mut World,
    spawner: &mut ThreatSpawner,
    rng: &mut impl RandomSource,
    dt: f64,
    next_id: &mut u32,
    events: &mut Vec<SimEvent>,
    sink: &mut S,
) -> Option<ThreatId> {
    let threat = spawner.update(dt, rng)?;
    let id = crate::world_setup::allocate_threat_id(next_id);

    events.push(SimEvent::ThreatSpawned {
        id,
        tag: threat.spec().tag.clone(),
        position: threat.position(),
        target: threat.target(),
        velocity: threat.velocity(),
    });
    sink.threat_spawned(id, &threat);
    tracing::info!(%id, tag = %threat.spec().tag, x = threat.position().x, "threat spawned");

    crate::world_setup::spawn_threat(world, id, threat);
    Some(id)
}
