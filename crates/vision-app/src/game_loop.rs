//! Game loop thread: drives the engine from a wall clock at the host frame rate.
//!
//! Every host frame is offered to `SimulationEngine::frame`, which applies the
//! tick-rate cap. Pointer samples and control commands arrive via `mpsc`.
//! Processed snapshots are stored in shared state for polling.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use vision_core::config::{ConfigError, SimConfig};
use vision_sim::SimulationEngine;

use crate::sink::LogSink;
use crate::state::{GameLoopCommand, LatestPointer, SharedSnapshot};

/// Frame rate at which the host offers frames to the engine.
pub const HOST_FRAME_RATE: u32 = 60;

/// Duration of one host frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / HOST_FRAME_RATE as u64);

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("game loop thread panicked")]
    Panicked,
}

/// Handle to a running game loop.
pub struct GameLoopHandle {
    pub commands: mpsc::Sender<GameLoopCommand>,
    pub latest_snapshot: SharedSnapshot,
    thread: JoinHandle<LogSink>,
}

impl GameLoopHandle {
    /// Ask the loop to stop and wait for it. Returns the sink with its tallies.
    pub fn shutdown(self) -> Result<LogSink, HostError> {
        // The loop also exits when the channel disconnects, so a send error is fine.
        let _ = self.commands.send(GameLoopCommand::Shutdown);
        self.thread.join().map_err(|_| HostError::Panicked)
    }
}

/// Validate `config`, build the engine and start it on its own thread.
pub fn spawn_game_loop(config: SimConfig) -> Result<GameLoopHandle, HostError> {
    let engine = SimulationEngine::new(config)?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = SharedSnapshot::default();
    let shared = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("vision-game-loop".into())
        .spawn(move || run_game_loop(engine, cmd_rx, &shared))?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        latest_snapshot,
        thread,
    })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
) -> LogSink {
    let mut pointer = LatestPointer::default();
    let mut sink = LogSink::default();
    let started = Instant::now();
    let mut next_frame_time = started;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Pointer(sample)) => pointer.set(sample),
                Ok(GameLoopCommand::Reset) => engine.reset(),
                Ok(GameLoopCommand::Shutdown) => return sink,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return sink,
            }
        }

        // 2. Offer a frame; the engine throttles to its tick-rate cap
        let now_secs = started.elapsed().as_secs_f64();
        if let Some(snapshot) = engine.frame(now_secs, &mut pointer, &mut sink) {
            if let Ok(mut lock) = latest_snapshot.lock() {
                *lock = Some(snapshot);
            }
        }

        // 3. Sleep until the next host frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind, skip ahead instead of bursting frames
            next_frame_time = now;
        }
    }
}
