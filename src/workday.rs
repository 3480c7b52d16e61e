use std::io::{self, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

use log::{debug, info, trace};
use termion::{clear, cursor, screen, style};

use crate::clock::{TimeOfDay, Window};
use crate::render::{self, Frame};

pub type TermResult = Result<(), io::Error>;

const TICK: Duration = Duration::from_secs(1);
const CTRL_C: u8 = 0x03;

/// Redraws the bar and countdown once a second until `q` or Ctrl-C shows
/// up on `stdin`, or `shutdown` is raised by a signal handler. Expects a
/// raw-mode terminal behind `stdout`.
pub struct Workday<R, W> {
    window: Window,
    stdin: R,
    stdout: W,
    shutdown: Arc<AtomicBool>,
    clock: fn() -> TimeOfDay,
    size: fn() -> io::Result<(u16, u16)>,
}

impl<R: Read, W: Write> Workday<R, W> {
    pub fn new(stdin: R, stdout: W, window: Window, shutdown: Arc<AtomicBool>) -> Workday<R, W> {
        Workday {
            window,
            stdin,
            stdout,
            shutdown,
            clock: TimeOfDay::now,
            size: termion::terminal_size,
        }
    }

    pub fn run(&mut self) -> TermResult {
        write!(self.stdout, "{}{}", clear::All, cursor::Hide)?;
        debug!(
            "tracking {} to {} ({} ms)",
            self.window.start(),
            self.window.end(),
            self.window.span()
        );

        let result = self.redraw_all().and_then(|()| self.run_loop());
        let cleaned = self.cleanup();
        result.and(cleaned)
    }

    fn run_loop(&mut self) -> TermResult {
        loop {
            self.tick()?;
            if self.shutdown.load(Ordering::SeqCst) {
                info!("termination signal, leaving");
                return Ok(());
            }
            if self.interrupted()? {
                info!("interrupted, leaving");
                return Ok(());
            }
            sleep(TICK);
        }
    }

    /// Samples the clock once and draws the matching frame.
    pub fn tick(&mut self) -> TermResult {
        let now = (self.clock)();
        let fraction = self.window.fraction_elapsed(now);
        let remaining = self.window.remaining(now);
        let frame = self.frame()?;
        trace!(
            "now={} fraction={:.4} remaining={}ms frame={}x{}",
            now,
            fraction,
            remaining,
            frame.width,
            frame.height
        );

        let mut writes = render::render_bar(frame, fraction);
        writes.extend(render::render_countdown(frame, remaining));
        self.draw(&writes)
    }

    fn redraw_all(&mut self) -> TermResult {
        let frame = self.frame()?;
        self.draw(&render::render_initial(frame))
    }

    fn frame(&self) -> io::Result<Frame> {
        (self.size)().map(Frame::from_size)
    }

    fn draw(&mut self, writes: &[render::Write]) -> TermResult {
        write!(self.stdout, "{}{}", clear::All, style::Reset)?;
        for w in writes {
            write!(self.stdout, "{}", w)?;
        }
        self.stdout.flush()
    }

    fn interrupted(&mut self) -> io::Result<bool> {
        let mut key_bytes = [0; 16];
        let read = self.stdin.read(&mut key_bytes)?;
        Ok(key_bytes[..read].iter().any(|&b| b == b'q' || b == CTRL_C))
    }

    fn cleanup(&mut self) -> TermResult {
        write!(
            self.stdout,
            "{}{}{}{}{}\n",
            cursor::Goto(1, 1),
            clear::All,
            cursor::Goto(1, 1),
            cursor::Show,
            screen::ToMainScreen,
        )?;
        self.stdout.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;
    use std::sync::atomic::AtomicUsize;

    fn noon() -> TimeOfDay {
        TimeOfDay::from_hms(12, 0, 0)
    }

    fn size_80x24() -> io::Result<(u16, u16)> {
        Ok((80, 24))
    }

    fn no_terminal() -> io::Result<(u16, u16)> {
        Err(io::Error::new(io::ErrorKind::Other, "not a tty"))
    }

    fn workday(input: &[u8], size: fn() -> io::Result<(u16, u16)>) -> Workday<Cursor<Vec<u8>>, Vec<u8>> {
        let window = Window::new(TimeOfDay::from_hms(9, 0, 0), TimeOfDay::from_hms(17, 0, 0)).unwrap();
        Workday {
            window,
            stdin: Cursor::new(input.to_vec()),
            stdout: vec![],
            shutdown: Arc::new(AtomicBool::new(false)),
            clock: noon,
            size,
        }
    }

    fn output<R>(w: &Workday<R, Vec<u8>>) -> String {
        String::from_utf8(w.stdout.clone()).unwrap()
    }

    #[test]
    fn tick_draws_bar_and_countdown() {
        let mut w = workday(b"", size_80x24);
        w.tick().unwrap();
        let out = output(&w);

        let frame = Frame::from_size((80, 24));
        for write in render::render_bar(frame, 0.375) {
            assert!(out.contains(&write.to_string()));
        }
        for write in render::render_countdown(frame, 18_000_000) {
            assert!(out.contains(&write.to_string()));
        }
        assert!(out.starts_with(&clear::All.to_string()));
    }

    #[test]
    fn quits_on_q() {
        let mut w = workday(b"q", size_80x24);
        w.run().unwrap();
        let out = output(&w);

        assert!(out.starts_with(&format!("{}{}", clear::All, cursor::Hide)));
        assert!(out.ends_with(&format!("{}{}\n", cursor::Show, screen::ToMainScreen)));
        let initial = render::render_initial(Frame::from_size((80, 24)));
        assert!(out.contains(&initial[0].to_string()));
    }

    #[test]
    fn quits_on_ctrl_c() {
        let mut w = workday(&[b'x', CTRL_C], size_80x24);
        w.run().unwrap();
        assert!(output(&w).contains(&cursor::Show.to_string()));
    }

    #[test]
    fn restores_terminal_when_size_fails() {
        let mut w = workday(b"q", no_terminal);
        assert!(w.run().is_err());
        let out = output(&w);
        assert!(out.ends_with(&format!("{}{}\n", cursor::Show, screen::ToMainScreen)));
    }

    #[test]
    fn draws_nothing_but_clear_on_tiny_terminal() {
        fn size_1x1() -> io::Result<(u16, u16)> {
            Ok((1, 1))
        }
        let mut w = workday(b"", size_1x1);
        w.tick().unwrap();
        assert_eq!(output(&w), format!("{}{}", clear::All, style::Reset));
    }

    #[test]
    fn stops_when_shutdown_is_raised() {
        let mut w = workday(b"", size_80x24);
        let shutdown = Arc::clone(&w.shutdown);
        shutdown.store(true, Ordering::SeqCst);
        w.run().unwrap();
        let out = output(&w);

        let frame = Frame::from_size((80, 24));
        assert!(out.contains(&render::render_bar(frame, 0.375)[0].to_string()));
        assert!(out.ends_with(&format!("{}{}\n", cursor::Show, screen::ToMainScreen)));
    }

    #[test]
    fn picks_up_resize_between_ticks() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        fn shrinking() -> io::Result<(u16, u16)> {
            match CALLS.fetch_add(1, Ordering::SeqCst) {
                0 => Ok((80, 24)),
                _ => Ok((40, 24)),
            }
        }

        let mut w = workday(b"", shrinking);
        w.tick().unwrap();
        let wide = output(&w);
        w.stdout.clear();
        w.tick().unwrap();
        let narrow = output(&w);

        let wide_bar = render::render_bar(Frame::from_size((80, 24)), 0.375);
        let narrow_bar = render::render_bar(Frame::from_size((40, 24)), 0.375);
        assert_eq!(narrow_bar[0].text.chars().count(), 38);
        assert!(wide.contains(&wide_bar[0].to_string()));
        assert!(narrow.contains(&narrow_bar[0].to_string()));
        assert!(!narrow.contains(&wide_bar[0].to_string()));

        let wide_clock = render::render_countdown(Frame::from_size((80, 24)), 18_000_000);
        let narrow_clock = render::render_countdown(Frame::from_size((40, 24)), 18_000_000);
        assert_eq!(wide_clock[0].col, 20);
        assert_eq!(narrow_clock[0].col, 0);
        for write in &narrow_clock {
            assert!(narrow.contains(&write.to_string()));
        }
        let rightmost = wide_clock.iter().max_by_key(|w| w.col).unwrap();
        assert_eq!(rightmost.col, 55);
        assert!(!narrow.contains(&rightmost.to_string()));
    }
}
