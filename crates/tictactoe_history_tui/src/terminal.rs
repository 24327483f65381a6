//! Raw mode and alternate screen setup.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::Write;
use tracing::{debug, instrument};

/// Guard for the raw-mode terminal. Restores it on drop.
///
/// Dropping also runs while unwinding, so a panic in the game loop or a
/// failure halfway through setup still hands back a usable shell.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode and switches `out` to the alternate screen.
    #[instrument(skip_all)]
    pub fn enter(out: W) -> Result<Self> {
        enable_raw_mode()?;
        // Built before the screen switch so a failed switch is undone too.
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen)?;
        debug!("Terminal prepared");
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
        debug!("Terminal restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    const LEAVE_ALTERNATE_SCREEN: &str = "\x1b[?1049l";
    const SHOW_CURSOR: &str = "\x1b[?25h";

    #[test]
    fn test_drop_restores_screen() {
        let mut out = Vec::new();
        drop(TerminalGuard { out: &mut out });

        let written = String::from_utf8(out).expect("escape codes are utf-8");
        assert!(written.contains(LEAVE_ALTERNATE_SCREEN));
        assert!(written.contains(SHOW_CURSOR));
    }

    #[test]
    fn test_panic_still_restores_screen() {
        let mut out = Vec::new();
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = TerminalGuard { out: &mut out };
            panic!("game loop failed");
        }));
        assert!(result.is_err());

        let written = String::from_utf8(out).expect("escape codes are utf-8");
        assert!(written.contains(LEAVE_ALTERNATE_SCREEN));
    }
}
