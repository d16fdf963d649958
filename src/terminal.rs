//! Terminal ownership for the TUI.
//!
//! [`init`] enters raw mode and the alternate screen and returns a guard;
//! restoring the terminal happens on drop, so every exit path (including
//! `?` bubbling out of the event loop) leaves the user's shell usable. The
//! panic hook restores first and mirrors the panic into the log file when
//! one is configured, since the default handler's output is lost once the
//! alternate screen is torn down.

use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};
use std::panic;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::error;

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the raw-mode terminal for the lifetime of a session.
pub struct TerminalGuard(AppTerminal);

impl Deref for TerminalGuard {
    type Target = AppTerminal;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = leave() {
            error!(error = %e, "failed to restore terminal");
        }
    }
}

/// Take over the terminal. Call once per session.
pub fn init() -> io::Result<TerminalGuard> {
    install_panic_hook();
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    Ok(TerminalGuard(terminal))
}

fn leave() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = leave();
        error!("{}", panic_summary(info));
        original_hook(info);
    }));
}

/// One-line panic description for the log file.
fn panic_summary(info: &panic::PanicHookInfo<'_>) -> String {
    let payload = info.payload();
    let message = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic payload>");

    match info.location() {
        Some(location) => format!("panic at {location}: {message}"),
        None => format!("panic: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_panic_summary_includes_message_and_location() {
        let captured = Arc::new(Mutex::new(String::new()));
        let sink = Arc::clone(&captured);

        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            *sink.lock().unwrap() = panic_summary(info);
        }));
        let _ = panic::catch_unwind(|| panic!("spinner exploded"));
        panic::set_hook(previous);

        let summary = captured.lock().unwrap();
        assert!(summary.contains("spinner exploded"));
        assert!(summary.contains("terminal.rs"));
    }
}
