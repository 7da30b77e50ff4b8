//! The application loop: [`Model`], [`Driver`], [`Effect`], [`App`].
//!
//! The loop is single-threaded. Each iteration drains pending messages into
//! the model, redraws when something changed, and then lets the driver
//! block for input until the next frame-clock tick is due. Ticks are
//! delivered as [`Msg::Tick`], so models never look at wall-clock time.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use crate::canvas::{Canvas, Frame, compute_frame, full_frame};
use crate::messages::Msg;

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A side-effect returned by [`Model::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Signal the application loop to stop.
    End,
}

// ---------------------------------------------------------------------------
// Model trait
// ---------------------------------------------------------------------------

/// The application model.
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `canvas`.
    fn draw(&self, canvas: &mut Canvas);
}

// ---------------------------------------------------------------------------
// Driver trait
// ---------------------------------------------------------------------------

/// Back-end driver (e.g. a terminal).
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Wait at most `timeout` for input and send whatever arrived through
    /// `tx`. Returning early with nothing sent is fine.
    fn poll_msgs(
        &mut self,
        timeout: Duration,
        tx: &Sender<Msg>,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Flush a computed frame to the screen.
    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Clean up / restore the terminal.
    fn close(&mut self);
}

// ---------------------------------------------------------------------------
// AppConfig / App
// ---------------------------------------------------------------------------

/// Configuration for creating an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    pub width: i32,
    pub height: i32,
    /// Frame-clock rate. Zero is treated as one tick per second.
    pub fps: u32,
}

/// The main application runner.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
    width: i32,
    height: i32,
    frame: Duration,
}

impl<M: Model, D: Driver> App<M, D> {
    /// Create a new application from a configuration.
    pub fn new(config: AppConfig<M, D>) -> Self {
        let fps = config.fps.max(1);
        Self {
            model: config.model,
            driver: config.driver,
            width: config.width,
            height: config.height,
            frame: Duration::from_secs(1) / fps,
        }
    }

    /// Access the model, e.g. to inspect it after [`run`](Self::run).
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Access the driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Run the loop until the model returns [`Effect::End`] or a
    /// [`Msg::Quit`] is processed. The driver is closed on every exit path.
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.driver.init()?;
        let result = self.event_loop();
        self.driver.close();
        result
    }

    fn event_loop(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let (tx, rx): (Sender<Msg>, Receiver<Msg>) = mpsc::channel();
        tx.send(Msg::Init).ok();

        let mut prev = Canvas::new(self.width, self.height);
        let mut curr = Canvas::new(self.width, self.height);
        let mut painted = false;
        let mut next_tick = Instant::now() + self.frame;

        loop {
            if self.process_pending(&rx, &mut prev, &mut curr, &mut painted)? {
                log::debug!("app loop finished");
                return Ok(());
            }

            let now = Instant::now();
            if now >= next_tick {
                tx.send(Msg::Tick).ok();
                next_tick += self.frame;
                if next_tick < now {
                    // Fell behind (slow flush); do not try to catch up.
                    next_tick = now + self.frame;
                }
                continue;
            }

            self.driver.poll_msgs(next_tick - now, &tx)?;
        }
    }

    /// Drain queued messages, update the model, draw, diff, and flush.
    /// Returns `true` if the app should stop.
    fn process_pending(
        &mut self,
        rx: &Receiver<Msg>,
        prev: &mut Canvas,
        curr: &mut Canvas,
        painted: &mut bool,
    ) -> Result<bool, Box<dyn std::error::Error>> {
        let mut needs_draw = false;

        while let Ok(msg) = rx.try_recv() {
            let quit = msg == Msg::Quit;
            if let Some(Effect::End) = self.model.update(msg) {
                return Ok(true);
            }
            if quit {
                return Ok(true);
            }
            needs_draw = true;
        }

        if needs_draw {
            self.model.draw(curr);
            let frame = if *painted {
                compute_frame(prev, curr)
            } else {
                *painted = true;
                full_frame(curr)
            };
            if !frame.cells.is_empty() {
                self.driver.flush(frame)?;
            }
            prev.copy_from(curr);
        }

        Ok(false)
    }
}
