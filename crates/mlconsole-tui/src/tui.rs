use std::io::{self, Stdout, stdout};
use std::panic;
use std::sync::Once;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

static PANIC_RESTORE: Once = Once::new();

/// Chain a hook that leaves the alternate screen before the previous hook
/// prints, otherwise the panic message is lost with the screen.
fn leave_on_panic() {
    PANIC_RESTORE.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = leave();
            previous(info);
        }));
    });
}

/// Take over the terminal: raw mode on the alternate screen.
pub fn enter() -> io::Result<Tui> {
    leave_on_panic();
    enable_raw_mode()?;
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e);
    }
    Terminal::new(CrosstermBackend::new(stdout()))
}

/// Hand the terminal back. Raw mode is switched off even when leaving the
/// alternate screen fails.
pub fn leave() -> io::Result<()> {
    let screen = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    screen
}
