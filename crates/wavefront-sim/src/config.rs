//! Construction-time parameters for an [`Explorer`](crate::Explorer).

use wavefront_paths::Directions;

use crate::explorer::Mode;

/// Grid and pacing parameters.
///
/// All values are plain numbers; [`sanitized`](Self::sanitized) only
/// enforces positivity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExplorerConfig {
    pub columns: i32,
    pub rows: i32,
    /// Probability that any one cell is a wall.
    pub wall_probability: f64,
    /// Ticks per BFS step in incremental mode.
    pub step_delay: u32,
    /// Neighbour priority for the adjacency index.
    pub directions: Directions,
    pub mode: Mode,
}

impl Default for ExplorerConfig {
    /// The animated demo: 50×30, 30% walls, one step per tick.
    fn default() -> Self {
        Self {
            columns: 50,
            rows: 30,
            wall_probability: 0.3,
            step_delay: 1,
            directions: Directions::DEFAULT,
            mode: Mode::Incremental,
        }
    }
}

impl ExplorerConfig {
    /// The goal-directed demo: 35×20, 20% walls, recomputed every tick.
    pub fn goal_directed() -> Self {
        Self {
            columns: 35,
            rows: 20,
            wall_probability: 0.2,
            mode: Mode::RecomputePerFrame,
            ..Self::default()
        }
    }

    /// Clamp sizes and delay to at least 1.
    pub fn sanitized(mut self) -> Self {
        self.columns = self.columns.max(1);
        self.rows = self.rows.max(1);
        self.step_delay = self.step_delay.max(1);
        self
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let c: ExplorerConfig =
            serde_json::from_str(r#"{"columns": 12, "mode": "RecomputePerFrame"}"#).unwrap();
        assert_eq!(c.columns, 12);
        assert_eq!(c.rows, 30);
        assert_eq!(c.mode, Mode::RecomputePerFrame);
    }
}
