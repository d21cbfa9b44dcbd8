//! Headless VISION COMMAND host.
//!
//! Usage: `vision-command [CONFIG.toml] [--seconds N] [--json]`
//!
//! Runs the simulation on the game loop thread with the autopilot steering the
//! pointer. `--json` prints every new snapshot as one JSON line on stdout.
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vision_app::autopilot;
use vision_app::game_loop::{spawn_game_loop, HOST_FRAME_RATE};
use vision_app::state::GameLoopCommand;
use vision_core::config::SimConfig;

#[derive(Debug, Parser)]
#[command(name = "vision-command")]
#[command(about = "Run the VISION COMMAND targeting simulation headless")]
struct Args {
    /// TOML config file; reference values when omitted
    config: Option<PathBuf>,

    /// Stop after this many seconds (runs until killed otherwise)
    #[arg(long, value_parser = positive_seconds)]
    seconds: Option<f64>,

    /// Print every processed snapshot as one JSON line on stdout
    #[arg(long)]
    json: bool,
}

fn positive_seconds(value: &str) -> Result<f64, String> {
    let seconds: f64 = value
        .parse()
        .map_err(|_| format!("invalid number: {value}"))?;
    if seconds.is_finite() && seconds > 0.0 {
        Ok(seconds)
    } else {
        Err(format!("must be positive, got {value}"))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    tracing::info!(config = ?args.config, seconds = ?args.seconds, "starting");

    let handle = spawn_game_loop(config)?;
    let frame = Duration::from_secs_f64(1.0 / f64::from(HOST_FRAME_RATE));
    let started = Instant::now();
    let mut last_tick = None;

    loop {
        if args
            .seconds
            .is_some_and(|limit| started.elapsed().as_secs_f64() >= limit)
        {
            break;
        }

        let snapshot = handle
            .latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone());

        if let Some(snapshot) = snapshot {
            if last_tick != Some(snapshot.time.tick) {
                last_tick = Some(snapshot.time.tick);
                if args.json {
                    println!("{}", serde_json::to_string(&snapshot)?);
                }
            }
            if handle
                .commands
                .send(GameLoopCommand::Pointer(autopilot::aim(&snapshot)))
                .is_err()
            {
                tracing::warn!("game loop stopped unexpectedly");
                break;
            }
        }

        std::thread::sleep(frame);
    }

    let sink = handle.shutdown()?;
    tracing::info!(
        shots = sink.shots,
        spawned = sink.spawned,
        expired = sink.expired,
        "finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("vision-command").chain(list.iter().copied()))
    }

    #[test]
    fn test_parse_defaults() {
        let parsed = args(&[]).unwrap();
        assert!(parsed.config.is_none());
        assert!(parsed.seconds.is_none());
        assert!(!parsed.json);
    }

    #[test]
    fn test_parse_all_options() {
        let parsed = args(&["game.toml", "--seconds", "12.5", "--json"]).unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("game.toml")));
        assert_eq!(parsed.seconds, Some(12.5));
        assert!(parsed.json);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(args(&["--seconds"]).is_err());
        assert!(args(&["--seconds", "soon"]).is_err());
        assert!(args(&["--seconds", "0"]).is_err());
        assert!(args(&["--verbose"]).is_err());
        assert!(args(&["a.toml", "b.toml"]).is_err());
    }

    #[test]
    fn test_command_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
