use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

type Restore = Box<dyn FnOnce() + Send + 'static>;

/// Puts the terminal back the way the counter found it.
///
/// The restore step runs exactly once: when the guard is dropped, or from
/// the panic hook if the UI panics first. Whichever comes first takes it.
pub struct TerminalGuard {
    restore: Arc<Mutex<Option<Restore>>>,
}

impl TerminalGuard {
    /// Arm `restore` for drop and chain it in front of the current panic hook.
    fn arm<F: FnOnce() + Send + 'static>(restore: F) -> Self {
        let restore: Restore = Box::new(restore);
        let restore = Arc::new(Mutex::new(Some(restore)));

        let on_panic = Arc::clone(&restore);
        let previous_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            run_once(&on_panic);
            previous_hook(info);
        }));

        Self { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        run_once(&self.restore);
    }
}

fn run_once(slot: &Mutex<Option<Restore>>) {
    if let Some(restore) = slot.lock().take() {
        restore();
    }
}

/// Raw mode, alternate screen, hidden cursor.
pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?.execute(Hide)?;

    let guard = TerminalGuard::arm(|| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    });
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    Ok((terminal, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn restore_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&calls);
        let restore: Restore = Box::new(move || {
            counted.fetch_add(1, Ordering::SeqCst);
        });
        let slot = Mutex::new(Some(restore));

        run_once(&slot);
        run_once(&slot);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
