//! Crossterm terminal driver for wavefront.
//!
//! [`CrosstermDriver`] implements [`wavefront_core::Driver`]: it puts the
//! terminal in raw mode on the alternate screen, turns key, mouse and
//! resize events into [`Msg`]s, and paints frame diffs cell by cell.

use std::io::{self, Write};
use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind},
    execute, queue,
    style::{Color as CtColor, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use wavefront_core::{Color, Driver, Frame, Key, Msg, MouseAction, Point};

/// Maps a [`wavefront_core::Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        CtColor::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        }
    }
}

/// Maps a crossterm [`KeyCode`] to a [`Key`].
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

/// Translate one terminal event. Events the app has no use for map to
/// `None`.
fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            kind: KeyEventKind::Release,
            ..
        }) => None,
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            ..
        }) if modifiers.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
        Event::Key(KeyEvent { code, .. }) => to_key(code).map(Msg::key),
        Event::Mouse(me) => {
            let action = match me.kind {
                MouseEventKind::Down(MouseButton::Left) => MouseAction::Main,
                MouseEventKind::Down(MouseButton::Right) => MouseAction::Secondary,
                MouseEventKind::Down(MouseButton::Middle) => MouseAction::Auxiliary,
                MouseEventKind::Moved | MouseEventKind::Drag(_) => MouseAction::Move,
                _ => return None,
            };
            Some(Msg::Mouse {
                action,
                pos: Point::new(i32::from(me.column), i32::from(me.row)),
            })
        }
        Event::Resize(w, h) => Some(Msg::Screen {
            width: i32::from(w),
            height: i32::from(h),
        }),
        _ => None,
    }
}

/// A terminal back-end using crossterm. Mouse capture is always on; the
/// demos are driven by clicks.
#[derive(Debug, Default)]
pub struct CrosstermDriver;

impl CrosstermDriver {
    /// Create a new driver.
    pub fn new() -> Self {
        Self
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        log::debug!("terminal initialised");
        Ok(())
    }

    fn poll_msgs(
        &mut self,
        timeout: Duration,
        tx: &Sender<Msg>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if !event::poll(timeout)? {
            return Ok(());
        }
        // Drain everything that is already queued without blocking again.
        loop {
            if let Some(msg) = to_msg(event::read()?) {
                tx.send(msg).ok();
            }
            if !event::poll(Duration::ZERO)? {
                return Ok(());
            }
        }
    }

    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = io::stdout().lock();
        for fc in &frame.cells {
            let (Ok(x), Ok(y)) = (u16::try_from(fc.pos.x), u16::try_from(fc.pos.y)) else {
                continue;
            };
            queue!(
                stdout,
                cursor::MoveTo(x, y),
                SetForegroundColor(to_ct_color(fc.glyph.fg)),
                SetBackgroundColor(to_ct_color(fc.glyph.bg)),
                Print(fc.glyph.ch)
            )?;
        }
        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            event::DisableMouseCapture,
            SetForegroundColor(CtColor::Reset),
            SetBackgroundColor(CtColor::Reset),
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        log::debug!("terminal restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn keys() {
        assert_eq!(
            to_msg(key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Msg::key(Key::Space))
        );
        assert_eq!(
            to_msg(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Msg::key(Key::Char('q')))
        );
        assert_eq!(
            to_msg(key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Msg::key(Key::Escape))
        );
        assert_eq!(
            to_msg(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Msg::Quit)
        );
        assert_eq!(to_msg(key(KeyCode::F(1), KeyModifiers::NONE)), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let ev = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(to_msg(ev), None);
    }

    #[test]
    fn mouse_buttons() {
        assert_eq!(
            to_msg(mouse(MouseEventKind::Down(MouseButton::Left), 7, 3)),
            Some(Msg::mouse(MouseAction::Main, 7, 3))
        );
        assert_eq!(
            to_msg(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0)),
            Some(Msg::mouse(MouseAction::Secondary, 0, 0))
        );
        assert_eq!(
            to_msg(mouse(MouseEventKind::Down(MouseButton::Middle), 1, 2)),
            Some(Msg::mouse(MouseAction::Auxiliary, 1, 2))
        );
        assert_eq!(
            to_msg(mouse(MouseEventKind::Moved, 4, 5)),
            Some(Msg::mouse(MouseAction::Move, 4, 5))
        );
        assert_eq!(
            to_msg(mouse(MouseEventKind::Up(MouseButton::Left), 4, 5)),
            None
        );
    }

    #[test]
    fn resize() {
        assert_eq!(
            to_msg(Event::Resize(80, 24)),
            Some(Msg::Screen {
                width: 80,
                height: 24
            })
        );
    }

    #[test]
    fn default_color_resets() {
        assert_eq!(to_ct_color(Color::DEFAULT), CtColor::Reset);
        assert_eq!(
            to_ct_color(Color::from_rgb(1, 2, 3)),
            CtColor::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
