//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs world of active threats, the reticle,
//! the dwell trigger and the spawn timer. It runs one tick per call and
//! produces `SimSnapshot`s. Completely headless, enabling deterministic testing.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use vision_aim::dwell::{DwellParams, DwellTrigger};
use vision_aim::reticle::{ReticleState, ReticleTracker};
use vision_core::components::{ThreatId, ThreatSpec};
use vision_core::config::{ConfigError, SimConfig};
use vision_core::enums::AimSource;
use vision_core::events::SimEvent;
use vision_core::state::{ScoreView, SimSnapshot, ThreatView};
use vision_core::types::{Position, SimTime};

use crate::clock::SimClock;
use crate::interfaces::{PointerSampler, RenderSink};
use crate::random::RandomSource;
use crate::systems;
use crate::systems::spawner::ThreatSpawner;
use crate::threat::Threat;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine<R: RandomSource = ChaCha8Rng> {
    world: World,
    config: SimConfig,
    time: SimTime,
    clock: SimClock,
    reticle: ReticleTracker,
    dwell: DwellTrigger,
    spawner: ThreatSpawner,
    rng: R,
    /// Last pointer sample seen; held when the sampler has nothing.
    last_pointer: Position,
    next_threat_id: u32,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
    score: ScoreView,
}

impl SimulationEngine<ChaCha8Rng> {
    /// Validate `config` and build an engine seeded from `config.seed`.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> SimulationEngine<R> {
    /// Build an engine with a caller-supplied random source.
    pub fn with_rng(config: SimConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            seed = config.seed,
            aim_source = ?config.aim_source,
            smoothing = ?config.smoothing_mode,
            cap = ?config.tick_rate_cap,
            "simulation engine created"
        );
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            clock: SimClock::new(config.min_frame_interval()),
            reticle: ReticleTracker::new(
                Position::ORIGIN,
                config.smoothing_factor,
                config.smoothing_mode,
            ),
            dwell: DwellTrigger::new(DwellParams::from(&config)),
            spawner: ThreatSpawner::from_config(&config),
            rng,
            last_pointer: Position::ORIGIN,
            next_threat_id: 0,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            score: ScoreView::default(),
            config,
        })
    }

    /// Host-frame entry point. Applies the tick-rate cap; a throttled frame
    /// returns `None` and changes nothing.
    pub fn frame(
        &mut self,
        now_secs: f64,
        sampler: &mut impl PointerSampler,
        sink: &mut impl RenderSink,
    ) -> Option<SimSnapshot> {
        let Some(dt) = self.clock.frame(now_secs) else {
            trace!(now_secs, "frame throttled");
            return None;
        };
        Some(self.tick(dt, sampler, sink))
    }

    /// Advance by one fixed step of `1 / fixed_tick_rate` seconds.
    pub fn step(
        &mut self,
        sampler: &mut impl PointerSampler,
        sink: &mut impl RenderSink,
    ) -> SimSnapshot {
        self.tick(self.config.fixed_dt(), sampler, sink)
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    pub fn tick(
        &mut self,
        dt: f64,
        sampler: &mut impl PointerSampler,
        sink: &mut impl RenderSink,
    ) -> SimSnapshot {
        debug_assert!(dt.is_finite() && dt >= 0.0, "bad dt {dt}");

        // 1. Pointer sample (hold last known when unavailable)
        if let Some(pointer) = sampler.current_position() {
            self.last_pointer = pointer;
        }

        // 2. Reticle
        let reticle = self.reticle.update(self.last_pointer, dt);

        // 3. Dwell trigger
        let aim = match self.config.aim_source {
            AimSource::Fast => reticle.fast,
            AimSource::Slow => reticle.slow,
        };
        if let Some(fire) = self.dwell.update(aim, dt) {
            debug!(x = fire.position.x, y = fire.position.y, tick = self.time.tick, "fired");
            self.score.shots_fired += 1;
            self.events.push(SimEvent::Fired {
                position: fire.position,
                tick: self.time.tick,
            });
            sink.fired(&fire);
        }
        sink.reticle(&reticle, self.dwell.state());

        // 4. Spawning
        if systems::spawner::run(
            &mut self.world,
            &mut self.spawner,
            &mut self.rng,
            dt,
            &mut self.next_threat_id,
            &mut self.events,
            sink,
        )
        .is_some()
        {
            self.score.threats_spawned += 1;
        }

        // 5. Movement integration + trails
        systems::movement::run(&mut self.world, dt, sink);

        // 6. Cleanup (expired threats)
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.events,
            &mut self.score,
            sink,
        );

        self.time.advance(dt);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &reticle,
            &self.dwell,
            events,
            &self.score,
        )
    }

    /// Clear threats, timers, reticle and dwell state. Config and the RNG
    /// stream are kept.
    pub fn reset(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.clock.reset();
        self.reticle.reset(Position::ORIGIN);
        self.dwell.reset();
        self.spawner.reset();
        self.last_pointer = Position::ORIGIN;
        self.next_threat_id = 0;
        self.events.clear();
        self.score = ScoreView::default();
        info!("simulation reset");
    }

    /// Insert a threat on a chosen path, bypassing the random spawner.
    ///
    /// `target.y` must be below `spawn.y` (or the two coincide, which moves
    /// straight down); a threat heading up would never expire.
    pub fn spawn_threat(&mut self, spec: ThreatSpec, spawn: Position, target: Position) -> ThreatId {
        debug_assert!(
            target.y < spawn.y || target == spawn,
            "threat path must descend: {spawn:?} -> {target:?}"
        );
        let (_entity, id) = world_setup::spawn_threat_between(
            &mut self.world,
            &mut self.next_threat_id,
            spec,
            spawn,
            target,
            self.config.max_trail_length,
        );
        self.score.threats_spawned += 1;
        id
    }

    /// Read-only views of the active threats, ordered by id.
    pub fn threats(&self) -> Vec<ThreatView> {
        systems::snapshot::build_threats(&self.world)
    }

    /// Visit every active threat (read-only).
    pub fn for_each_threat(&self, mut f: impl FnMut(ThreatId, &Threat)) {
        for (_entity, (id, threat)) in self.world.query::<(&ThreatId, &Threat)>().iter() {
            f(*id, threat);
        }
    }

    /// Copy of one active threat, if it still exists.
    pub fn threat(&self, id: ThreatId) -> Option<Threat> {
        let mut found = None;
        self.for_each_threat(|other, threat| {
            if other == id {
                found = Some(threat.clone());
            }
        });
        found
    }

    pub fn threat_count(&self) -> usize {
        self.world.len() as usize
    }

    pub fn reticle(&self) -> ReticleState {
        self.reticle.state()
    }

    pub fn dwell(&self) -> &DwellTrigger {
        &self.dwell
    }

    pub fn spawner(&self) -> &ThreatSpawner {
        &self.spawner
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn score(&self) -> ScoreView {
        self.score
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}
