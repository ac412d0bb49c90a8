use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type DashTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back into cooked mode when dropped or when the process
/// panics, whichever comes first.
pub struct TerminalGuard {
    restored: Arc<AtomicBool>,
}

impl TerminalGuard {
    fn install_panic_hook(&self) {
        let restored = Arc::clone(&self.restored);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if !restored.swap(true, Ordering::SeqCst) {
                restore_terminal();
            }
            default_hook(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored.swap(true, Ordering::SeqCst) {
            restore_terminal();
        }
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(DisableBracketedPaste);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

/// Raw mode, alternate screen, bracketed paste, hidden cursor.
pub fn setup_terminal() -> io::Result<(DashTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard {
        restored: Arc::new(AtomicBool::new(false)),
    };
    guard.install_panic_hook();

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableBracketedPaste)?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
