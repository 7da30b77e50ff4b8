//! The command/query surface the front ends talk to.

use rand::Rng;
use wavefront_core::Point;
use wavefront_paths::{AdjacencyIndex, BfsState, InvalidCell, Search, Step, Visited, solve};

use crate::config::ExplorerConfig;
use crate::grid::Grid;
use crate::mapgen::MapGen;

/// How the traversal reacts to ticks and to start/goal changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// One frontier pop per step, paced by the step delay and the running
    /// flag. A new start resets the traversal; a new goal only moves the
    /// point where it stops and the path that is shown.
    #[default]
    Incremental,
    /// A full goal-directed search from scratch on every tick and on every
    /// start or goal change.
    RecomputePerFrame,
}

#[derive(Debug, Clone)]
enum Traversal {
    /// Incremental mode before the first start is chosen.
    Idle,
    Stepping(BfsState),
    Solved(Search),
}

/// A grid, its adjacency index, and one traversal over it.
///
/// Commands validate cells first and leave the state untouched when they
/// return [`InvalidCell`].
#[derive(Debug, Clone)]
pub struct Explorer {
    grid: Grid,
    index: AdjacencyIndex,
    mode: Mode,
    step_delay: u32,
    ticks: u64,
    running: bool,
    start: Option<Point>,
    goal: Option<Point>,
    traversal: Traversal,
}

impl Explorer {
    /// Generate a grid from `config` with `rng` and wrap it.
    pub fn generate<R: Rng>(config: &ExplorerConfig, rng: R) -> Self {
        let config = config.clone().sanitized();
        let grid = MapGen::new(rng).random_obstacles(
            config.columns,
            config.rows,
            config.wall_probability,
        );
        Self::with_grid(grid, &config)
    }

    /// Wrap an existing grid. The size fields of `config` are ignored.
    ///
    /// In [`Mode::RecomputePerFrame`] start and goal both begin at the
    /// first free cell in row-major order, and the first search runs
    /// immediately.
    pub fn with_grid(grid: Grid, config: &ExplorerConfig) -> Self {
        let index = grid.adjacency(config.directions);
        let mut explorer = Self {
            grid,
            index,
            mode: config.mode,
            step_delay: config.step_delay.max(1),
            ticks: 0,
            running: true,
            start: None,
            goal: None,
            traversal: Traversal::Idle,
        };
        if explorer.mode == Mode::RecomputePerFrame {
            explorer.start = explorer.grid.first_free();
            explorer.goal = explorer.start;
            explorer.recompute();
        }
        explorer
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Move the start. Resets the traversal in both modes.
    pub fn set_start(&mut self, p: Point) -> Result<(), InvalidCell> {
        if let Err(e) = InvalidCell::check(&self.index, p) {
            log::debug!("ignoring start: {e}");
            return Err(e);
        }
        match self.mode {
            Mode::Incremental => {
                if let Traversal::Stepping(state) = &mut self.traversal {
                    state.reset(&self.index, p)?;
                } else {
                    self.traversal = Traversal::Stepping(BfsState::new(&self.index, p)?);
                }
                self.start = Some(p);
                log::debug!("traversal restarted at {p}");
            }
            Mode::RecomputePerFrame => {
                self.start = Some(p);
                self.goal.get_or_insert(p);
                self.recompute();
            }
        }
        Ok(())
    }

    /// Move the goal. Only recomputes in [`Mode::RecomputePerFrame`].
    pub fn set_goal(&mut self, p: Point) -> Result<(), InvalidCell> {
        if let Err(e) = InvalidCell::check(&self.index, p) {
            log::debug!("ignoring goal: {e}");
            return Err(e);
        }
        self.goal = Some(p);
        if self.mode == Mode::RecomputePerFrame {
            self.recompute();
        }
        Ok(())
    }

    /// Pause or resume stepping. No-op in [`Mode::RecomputePerFrame`].
    pub fn toggle_running(&mut self) {
        if self.mode == Mode::Incremental {
            self.running = !self.running;
            log::debug!("running = {}", self.running);
        }
    }

    /// Advance the frame clock by one tick.
    ///
    /// In incremental mode a step happens on every `step_delay`-th tick
    /// while running, until the frontier is empty or the goal has been
    /// popped; the step taken is returned. In recompute mode the search is
    /// redone and `None` is returned.
    pub fn tick(&mut self) -> Option<Step> {
        let tick = self.ticks;
        self.ticks += 1;
        match self.mode {
            Mode::Incremental => {
                if !self.running || tick % u64::from(self.step_delay) != 0 {
                    return None;
                }
                let Traversal::Stepping(state) = &mut self.traversal else {
                    return None;
                };
                if self.goal == Some(state.head()) {
                    return None;
                }
                let step = state.step(&self.index);
                if step != Step::Exhausted && state.is_done() {
                    log::info!(
                        "traversal from {} complete: {} cells in {} steps",
                        state.start(),
                        state.visited().len(),
                        state.expansions()
                    );
                }
                Some(step)
            }
            Mode::RecomputePerFrame => {
                self.recompute();
                None
            }
        }
    }

    fn recompute(&mut self) {
        let (Some(start), Some(goal)) = (self.start, self.goal) else {
            return;
        };
        let result = if let Traversal::Solved(search) = &mut self.traversal {
            search.resolve(&self.index, start, goal)
        } else {
            solve(&self.index, start, goal).map(|search| self.traversal = Traversal::Solved(search))
        };
        if let Err(e) = result {
            log::warn!("search from {start} to {goal} rejected: {e}");
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Wall cells in row-major order.
    pub fn wall_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.grid.walls()
    }

    /// Discovered cells in discovery order.
    pub fn visited_cells(&self) -> &[Point] {
        self.visited().map_or(&[][..], |v| v.cells())
    }

    /// Cells waiting in the frontier, front first.
    pub fn frontier_cells(&self) -> impl Iterator<Item = Point> + '_ {
        let frontier = match &self.traversal {
            Traversal::Idle => None,
            Traversal::Stepping(state) => Some(state.frontier()),
            Traversal::Solved(search) => Some(search.frontier()),
        };
        frontier.into_iter().flatten().copied()
    }

    /// Path from `target` back to the start, target first; empty when
    /// `target` has not been discovered (yet).
    pub fn path_cells(&self, target: Point) -> Vec<Point> {
        self.visited()
            .map(|v| wavefront_paths::path_to(v, target))
            .unwrap_or_default()
    }

    /// The path the front end should highlight: towards
    /// [`current_or_goal_cell`](Self::current_or_goal_cell).
    pub fn path(&self) -> Vec<Point> {
        self.current_or_goal_cell()
            .map(|p| self.path_cells(p))
            .unwrap_or_default()
    }

    /// The start cell, once chosen.
    #[inline]
    pub fn start_cell(&self) -> Option<Point> {
        self.start
    }

    /// The goal if one is set; otherwise, in incremental mode, the last
    /// popped cell.
    pub fn current_or_goal_cell(&self) -> Option<Point> {
        if self.goal.is_some() {
            return self.goal;
        }
        match &self.traversal {
            Traversal::Stepping(state) => Some(state.head()),
            _ => None,
        }
    }

    /// The goal, if set.
    #[inline]
    pub fn goal_cell(&self) -> Option<Point> {
        self.goal
    }

    /// The last popped cell of an incremental traversal.
    pub fn head_cell(&self) -> Option<Point> {
        match &self.traversal {
            Traversal::Stepping(state) => Some(state.head()),
            _ => None,
        }
    }

    /// The visited map of the current traversal, if any.
    pub fn visited(&self) -> Option<&Visited> {
        match &self.traversal {
            Traversal::Idle => None,
            Traversal::Stepping(state) => Some(state.visited()),
            Traversal::Solved(search) => Some(search.visited()),
        }
    }

    /// Whether the current traversal has nothing left to do: the frontier
    /// is empty or the goal was reached. `false` before a start is chosen.
    pub fn is_finished(&self) -> bool {
        match &self.traversal {
            Traversal::Idle => false,
            Traversal::Stepping(state) => state.is_done() || self.goal == Some(state.head()),
            Traversal::Solved(_) => true,
        }
    }

    /// Whether a goal-directed search reached its goal.
    pub fn goal_reached(&self) -> bool {
        match &self.traversal {
            Traversal::Solved(search) => search.reached(),
            Traversal::Stepping(state) => self.goal == Some(state.head()),
            Traversal::Idle => false,
        }
    }

    /// Whether incremental stepping is enabled.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a start has been chosen.
    #[inline]
    pub fn is_started(&self) -> bool {
        self.start.is_some()
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn index(&self) -> &AdjacencyIndex {
        &self.index
    }

    /// Ticks seen so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
