/// Raw-mode terminal session that is always restored
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self},
};
use log::warn;
use std::io::{self, Write};

/// Owns the terminal setup: alternate screen, mouse capture, hidden cursor
/// and (optionally) raw mode. Restores everything on `restore` or drop.
pub struct TerminalSession<W: Write> {
    out: W,
    raw_mode: bool,
    active: bool,
}

impl<W: Write> TerminalSession<W> {
    /// Enable raw mode, then enter the alternate screen with mouse capture
    pub fn enter(out: W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Self::enter_with(out, true)
    }

    /// Setup without touching raw mode unless `raw_mode` says it is already on.
    ///
    /// The session exists before any setup command is written, so a failed
    /// setup still restores on drop.
    pub(crate) fn enter_with(out: W, raw_mode: bool) -> io::Result<Self> {
        let mut session = Self {
            out,
            raw_mode,
            active: true,
        };
        execute!(
            session.out,
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(session)
    }

    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let restored = execute!(
            self.out,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        );
        if self.raw_mode {
            terminal::disable_raw_mode()?;
        }
        restored
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("failed to restore terminal: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAVE_ALTERNATE_SCREEN: &[u8] = b"\x1b[?1049l";

    /// Fails the first write, records the rest
    struct FlakyWriter {
        fail_next: bool,
        written: Vec<u8>,
    }

    impl Write for FlakyWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.fail_next {
                self.fail_next = false;
                return Err(io::Error::new(io::ErrorKind::Other, "terminal gone"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_failed_setup_still_restores() {
        let mut writer = FlakyWriter {
            fail_next: true,
            written: Vec::new(),
        };
        let result = TerminalSession::enter_with(&mut writer, false);
        assert!(result.is_err());
        drop(result);
        assert!(contains(&writer.written, LEAVE_ALTERNATE_SCREEN));
    }

    #[test]
    fn test_restore_runs_once() {
        let mut writer = FlakyWriter {
            fail_next: false,
            written: Vec::new(),
        };
        {
            let mut session = TerminalSession::enter_with(&mut writer, false).unwrap();
            session.restore().unwrap();
        }
        let leaves = writer
            .written
            .windows(LEAVE_ALTERNATE_SCREEN.len())
            .filter(|w| *w == LEAVE_ALTERNATE_SCREEN)
            .count();
        assert_eq!(leaves, 1);
    }
}
