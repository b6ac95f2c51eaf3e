/// Main application struct and event loop
use crate::actions::Action;
use crate::dispatcher::{ActionReceiver, Dispatcher};
use crate::effects::Effects;
use crate::keyboard;
use crate::stores::{AppLogsStore, CredentialsStore, DashboardStore, SessionStore, UIStore};
use crate::ui::render_layout;
use mlconsole_api::MlBackend;
use mlconsole_core::get_mlconsole_setting;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// The main application structure following flux architecture
pub struct App {
    /// Dispatcher for sending actions
    dispatcher: Dispatcher,

    /// Store for the logged-in flag
    session_store: SessionStore,

    /// Store for the sign-in / sign-up form
    credentials_store: CredentialsStore,

    /// Store for everything behind the four tabs
    dashboard_store: DashboardStore,

    /// Store for UI state
    ui_store: UIStore,

    /// Store for application logs
    app_logs_store: AppLogsStore,

    /// Effects handler for side effects
    effects: Effects,
}

impl App {
    pub fn new(
        backend: Arc<dyn MlBackend>,
    ) -> Result<(Self, ActionReceiver), Box<dyn std::error::Error>> {
        let (dispatcher, rx) = Dispatcher::new();
        let action_receiver = ActionReceiver::new(rx);

        let log_buffer = crate::logger::init_memory_logger()?;

        let dashboard_store = DashboardStore::new();
        let effects = Effects::new(dispatcher.clone(), backend, dashboard_store.clone());

        Ok((
            Self {
                dispatcher,
                session_store: SessionStore::new(),
                credentials_store: CredentialsStore::new(),
                dashboard_store,
                ui_store: UIStore::new(),
                app_logs_store: AppLogsStore::new(log_buffer),
                effects,
            },
            action_receiver,
        ))
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut crate::tui::Tui,
        mut action_receiver: ActionReceiver,
    ) -> io::Result<()> {
        log::info!("ML console started");
        let tick_rate = get_mlconsole_setting!(MLCONSOLE_TICK_RATE_MS, usize) as u64;

        loop {
            terminal.draw(|frame| {
                render_layout(
                    frame,
                    &self.session_store,
                    &self.credentials_store,
                    &self.dashboard_store,
                    &self.ui_store,
                    &self.app_logs_store,
                );
            })?;

            if self.ui_store.should_exit() {
                break;
            }

            tokio::select! {
                _ = tokio::time::sleep(Duration::from_millis(tick_rate)) => {
                    if event::poll(Duration::from_millis(0))? {
                        if let Event::Key(key_event) = event::read()? {
                            // Only process key press events (not release)
                            if key_event.kind == KeyEventKind::Press {
                                if let Some(action) = keyboard::handle_key_event(
                                    key_event,
                                    &self.session_store,
                                    &self.credentials_store,
                                    &self.dashboard_store,
                                    &self.ui_store,
                                ) {
                                    self.dispatcher.dispatch(action);
                                }
                            }
                        }
                    }
                }

                Some(action) = action_receiver.recv() => {
                    self.handle_action(&action);
                }
            }
        }

        log::info!("ML console exiting");
        Ok(())
    }

    /// Handle an action by routing it to stores and effects
    fn handle_action(&mut self, action: &Action) {
        log::debug!("Handling action: {:?}", action);

        self.session_store.reduce(action);
        self.credentials_store.reduce(action);
        self.dashboard_store.reduce(action);
        self.ui_store.reduce(action);

        // Effects read the dashboard snapshot, so reducers run first
        self.effects.handle(action);

        self.app_logs_store.reduce(action);
    }
}
