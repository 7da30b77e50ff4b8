//! Shared front end for the BFS demos.
//!
//! [`Visualizer`] is the [`Model`] both binaries run: it forwards ticks and
//! pointer clicks to an [`Explorer`] and paints its cell categories onto the
//! canvas, one grid cell per `cell_width` terminal columns, with a status
//! line underneath.

pub mod cli;

use wavefront_core::{Canvas, Color, Effect, Glyph, Key, Model, MouseAction, Msg, Point};
use wavefront_sim::{Explorer, Mode};

pub use cli::{Cli, init_logging, run};

// Colours
const COL_BG: Color = Color::from_rgb(20, 20, 30);
const COL_WALL: Color = Color::from_rgb(255, 115, 0);
const COL_VISITED: Color = Color::from_rgb(34, 139, 34);
const COL_FRONTIER: Color = Color::from_rgb(47, 79, 79);
const COL_PATH: Color = Color::from_rgb(255, 255, 255);
const COL_START: Color = Color::from_rgb(0, 0, 255);
const COL_HEAD: Color = Color::from_rgb(255, 0, 255);
const COL_HOVER: Color = Color::from_rgb(255, 0, 0);
const COL_STATUS_FG: Color = Color::from_rgb(200, 200, 200);
const COL_STATUS_BG: Color = Color::from_rgb(30, 30, 50);
const COL_NOTICE: Color = Color::from_rgb(220, 80, 80);

const PATH_CHAR: char = '•';

/// Widest cell the visualizer will draw, in terminal columns.
pub const MAX_CELL_WIDTH: i32 = 16;

/// Renders an [`Explorer`] and feeds it user input.
pub struct Visualizer {
    explorer: Explorer,
    cell_width: i32,
    hover: Option<Point>,
    notice: Option<String>,
}

impl Visualizer {
    /// Wrap `explorer`, drawing each cell `cell_width` columns wide,
    /// clamped to `1..=MAX_CELL_WIDTH`.
    pub fn new(explorer: Explorer, cell_width: i32) -> Self {
        Self {
            explorer,
            cell_width: cell_width.clamp(1, MAX_CELL_WIDTH),
            hover: None,
            notice: None,
        }
    }

    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    /// The cell under the pointer, if it is inside the grid.
    pub fn hover(&self) -> Option<Point> {
        self.hover
    }

    /// The message of the last rejected click, cleared by the next
    /// accepted one.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Canvas size needed: the grid plus one status row.
    pub fn canvas_size(&self) -> (i32, i32) {
        let grid = self.explorer.grid();
        (
            grid.columns().saturating_mul(self.cell_width),
            grid.rows().saturating_add(1),
        )
    }

    /// Translate a terminal position into a grid cell.
    pub fn cell_at(&self, pos: Point) -> Point {
        Point::new(pos.x.div_euclid(self.cell_width), pos.y)
    }

    fn click(&mut self, action: MouseAction, cell: Point) {
        let mode = self.explorer.mode();
        let result = match (mode, action) {
            (Mode::Incremental, MouseAction::Main) => self.explorer.set_start(cell),
            (Mode::Incremental, MouseAction::Secondary) => {
                self.explorer.toggle_running();
                Ok(())
            }
            (Mode::Incremental, MouseAction::Auxiliary) => self.explorer.set_goal(cell),
            (Mode::RecomputePerFrame, MouseAction::Main) => self.explorer.set_goal(cell),
            (Mode::RecomputePerFrame, MouseAction::Secondary) => self.explorer.set_start(cell),
            _ => Ok(()),
        };
        self.notice = result.err().map(|e| e.to_string());
    }

    /// Paint `cell` across its `cell_width` slots with `style` applied to
    /// whatever is already there.
    fn paint(&self, canvas: &mut Canvas, cell: Point, style: impl Fn(Glyph) -> Glyph) {
        let x0 = cell.x.saturating_mul(self.cell_width);
        for dx in 0..self.cell_width {
            let p = Point::new(x0 + dx, cell.y);
            canvas.set(p, style(canvas.at(p)));
        }
    }

    fn status(&self) -> String {
        let ex = &self.explorer;
        let visited = ex.visited_cells().len();
        let frontier = ex.frontier_cells().count();
        match ex.mode() {
            Mode::Incremental => {
                let state = if !ex.is_started() {
                    "click to start"
                } else if ex.is_finished() {
                    "done"
                } else if ex.is_running() {
                    "running"
                } else {
                    "paused"
                };
                format!(
                    " BFS {state} | visited {visited} frontier {frontier} | L start  M goal  R/space pause  q quit"
                )
            }
            Mode::RecomputePerFrame => {
                let path = ex.path();
                let length = match path.len() {
                    0 => "unreachable".to_string(),
                    n => (n - 1).to_string(),
                };
                format!(" path {length} | visited {visited} | L goal  R start  q quit")
            }
        }
    }
}

impl Model for Visualizer {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init | Msg::Screen { .. } => None,
            Msg::Quit => Some(Effect::End),
            Msg::Tick => {
                self.explorer.tick();
                None
            }
            Msg::KeyDown { key } => match key {
                Key::Escape | Key::Char('q') => Some(Effect::End),
                Key::Space => {
                    self.explorer.toggle_running();
                    None
                }
                _ => None,
            },
            Msg::Mouse { action, pos } => {
                let cell = self.cell_at(pos);
                self.hover = self.explorer.grid().contains(cell).then_some(cell);
                if action != MouseAction::Move {
                    self.click(action, cell);
                }
                None
            }
        }
    }

    fn draw(&self, canvas: &mut Canvas) {
        let ex = &self.explorer;
        canvas.fill(Glyph::fill(COL_BG));

        for p in ex.wall_cells() {
            self.paint(canvas, p, |g| g.with_bg(COL_WALL));
        }
        for &p in ex.visited_cells() {
            self.paint(canvas, p, |g| g.with_bg(COL_VISITED));
        }
        for p in ex.frontier_cells() {
            self.paint(canvas, p, |g| g.with_bg(COL_FRONTIER));
        }
        for p in ex.path() {
            self.paint(canvas, p, |g| g.with_char(PATH_CHAR).with_fg(COL_PATH));
        }
        if let Some(p) = ex.start_cell() {
            self.paint(canvas, p, |g| g.with_bg(COL_START));
        }
        if let Some(p) = ex.current_or_goal_cell() {
            self.paint(canvas, p, |g| g.with_bg(COL_HEAD));
        }
        if let Some(p) = self.hover {
            self.paint(canvas, p, |g| g.with_bg(COL_HOVER));
        }

        let status_y = ex.grid().rows();
        let bar = Glyph::fill(COL_STATUS_BG).with_fg(COL_STATUS_FG);
        for x in 0..canvas.width() {
            canvas.set(Point::new(x, status_y), bar);
        }
        let written = canvas.print(Point::new(0, status_y), &self.status(), bar);
        if let Some(notice) = &self.notice {
            canvas.print(
                Point::new(written as i32, status_y),
                &format!(" | {notice}"),
                bar.with_fg(COL_NOTICE),
            );
        }
    }
}
