//! Drill state of a chart-editing session

use serde::{Deserialize, Serialize};

/// Currently active level of a drill path.
///
/// `current` indexes into the derived drill path. Bounds are the caller's
/// responsibility: the path may not be known yet, or may shrink after a
/// configuration change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DrillState {
    pub current: usize,
}

impl DrillState {
    pub fn new(current: usize) -> Self {
        Self { current }
    }

    /// Set the active level
    pub fn set_active_level(&mut self, level: usize) {
        self.current = level;
    }
}
