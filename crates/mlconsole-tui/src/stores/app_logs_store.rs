/// AppLogsStore mirrors the in-memory log buffer for the developer log overlay
use crate::actions::Action;
use crate::logger::LogBuffer;
use mlconsole_core::get_mlconsole_setting;
use std::sync::{Arc, PoisonError, RwLock};

/// Internal state for application logs
#[derive(Debug, Clone, Default)]
pub struct AppLogsState {
    /// Formatted log lines, oldest first
    pub logs: Vec<String>,

    /// Lines scrolled up from the most recent one
    pub scroll_offset: usize,
}

/// Store that holds application log state
pub struct AppLogsStore {
    state: Arc<RwLock<AppLogsState>>,
    log_buffer: LogBuffer,
    window: usize,
}

impl AppLogsStore {
    pub fn new(log_buffer: LogBuffer) -> Self {
        Self {
            state: Arc::new(RwLock::new(AppLogsState::default())),
            log_buffer,
            window: get_mlconsole_setting!(MLCONSOLE_LOG_OVERLAY_LINES, usize),
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> AppLogsState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Refresh logs from the buffer and handle scroll actions
    pub fn reduce(&self, action: &Action) {
        // Always refresh: effects log before dispatching their result
        self.refresh_logs();

        if let Action::ScrollLogs(amount) = action {
            let amount = *amount;
            if amount >= 0 {
                self.scroll_up(amount.unsigned_abs() as usize);
            } else {
                self.scroll_down(amount.unsigned_abs() as usize);
            }
        }
    }

    fn refresh_logs(&self) {
        let logs = self.log_buffer.get_recent_logs(self.window);
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.logs = logs;
        state.scroll_offset = state.scroll_offset.min(state.logs.len());
    }

    fn scroll_down(&self, amount: usize) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.scroll_offset = state.scroll_offset.saturating_sub(amount);
    }

    fn scroll_up(&self, amount: usize) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.scroll_offset = state
            .scroll_offset
            .saturating_add(amount)
            .min(state.logs.len());
    }
}
