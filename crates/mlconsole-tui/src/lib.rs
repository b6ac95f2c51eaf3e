use mlconsole_api::MlBackend;
use std::io;
use std::sync::Arc;

mod actions;
mod app;
mod dispatcher;
mod effects;
mod focus;
mod keyboard;
mod logger;
mod stores;
mod ui;

mod common;
mod tui;

pub use app::App;

/// Run the console against `backend` until the user quits
pub async fn tui_main(backend: Arc<dyn MlBackend>) -> io::Result<()> {
    // panic reports must be hooked up before raw mode starts
    if let Err(e) = color_eyre::install() {
        eprintln!("color-eyre unavailable, using default panic output: {e}");
    }

    let mut terminal = tui::enter()?;
    let outcome = run_console(&mut terminal, backend).await;
    let left = tui::leave();

    // errors are printed only once the screen is back
    match outcome {
        Err(e) => {
            eprintln!("mlconsole stopped: {e}");
            Err(e)
        }
        Ok(()) => left,
    }
}

async fn run_console(terminal: &mut tui::Tui, backend: Arc<dyn MlBackend>) -> io::Result<()> {
    // building the app installs the in-memory logger
    let (mut app, action_receiver) =
        App::new(backend).map_err(|e| io::Error::other(format!("startup failed: {e}")))?;
    app.run(terminal, action_receiver).await
}
