//! State shared between the host thread and the game loop thread.

use std::sync::{Arc, Mutex};

use vision_core::state::SimSnapshot;
use vision_core::types::Position;
use vision_sim::interfaces::PointerSampler;

/// Commands sent from the host to the game loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLoopCommand {
    /// Latest pointer position in scene coordinates; `None` when the pointer left the view.
    Pointer(Option<Position>),
    /// Clear the simulation and start over.
    Reset,
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the game loop and polled by the host.
pub type SharedSnapshot = Arc<Mutex<Option<SimSnapshot>>>;

/// Pointer sampler fed by `GameLoopCommand::Pointer` messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatestPointer {
    sample: Option<Position>,
}

impl LatestPointer {
    pub fn set(&mut self, sample: Option<Position>) {
        self.sample = sample;
    }
}

impl PointerSampler for LatestPointer {
    fn current_position(&mut self) -> Option<Position> {
        self.sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_pointer_starts_empty() {
        let mut pointer = LatestPointer::default();
        assert_eq!(pointer.current_position(), None);
        pointer.set(Some(Position::new(4.0, 2.0)));
        assert_eq!(pointer.current_position(), Some(Position::new(4.0, 2.0)));
        pointer.set(None);
        assert_eq!(pointer.current_position(), None);
    }
}
