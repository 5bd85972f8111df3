//! Raw mode and alternate screen management with panic-safe cleanup.

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use std::io;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

/// Set while the presentation owns the terminal (read by the panic hook and
/// the signal handler).
pub(crate) static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Guard that owns raw mode, the alternate screen and the hidden cursor.
///
/// The previous terminal settings come back when the guard drops, when
/// [`RawModeGuard::exit`] is called, when the process panics, and when
/// `restore_terminal` runs from a signal handler.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    /// Enter raw mode and the alternate screen.
    ///
    /// # Errors
    /// Returns an error if raw mode cannot be enabled or the alternate
    /// screen cannot be entered. Raw mode is rolled back in the second case.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);

        if let Err(e) = crossterm::execute!(io::stdout(), EnterAlternateScreen, Hide) {
            restore_terminal();
            return Err(e);
        }

        Ok(Self { active: true })
    }

    /// Restore the terminal now. The guard's drop is a no-op afterwards.
    pub fn exit(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            if RAW_MODE_ACTIVE.swap(false, Ordering::SeqCst) {
                crossterm::execute!(io::stdout(), Show, LeaveAlternateScreen)?;
                disable_raw_mode()?;
            }
        }
        Ok(())
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            restore_terminal();
        }
    }
}

/// Best-effort restoration of the terminal, safe to call more than once.
pub fn restore_terminal() {
    if RAW_MODE_ACTIVE.swap(false, Ordering::SeqCst) {
        let _ = crossterm::execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Install a panic hook that restores the terminal before the panic message
/// is printed.
pub(crate) fn install_panic_hook() {
    static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_enter_and_drop() {
        // Raw mode needs a real TTY; CI runs without one.
        match RawModeGuard::enter() {
            Ok(guard) => {
                assert!(RAW_MODE_ACTIVE.load(Ordering::SeqCst));
                drop(guard);
                assert!(!RAW_MODE_ACTIVE.load(Ordering::SeqCst));
            }
            Err(e) => {
                eprintln!("Skipping test (no TTY): {}", e);
            }
        }
    }

    #[test]
    fn test_guard_manual_exit() {
        match RawModeGuard::enter() {
            Ok(mut guard) => {
                guard.exit().expect("Should exit raw mode");
                assert!(!RAW_MODE_ACTIVE.load(Ordering::SeqCst));
                drop(guard);
                assert!(!RAW_MODE_ACTIVE.load(Ordering::SeqCst));
            }
            Err(e) => {
                eprintln!("Skipping test (no TTY): {}", e);
            }
        }
    }

    #[test]
    fn test_restore_without_guard_is_noop() {
        restore_terminal();
        restore_terminal();
    }

    #[test]
    fn test_panic_hook_installation() {
        install_panic_hook();
        install_panic_hook();
    }
}
