/// Store modules that hold application state
/// Each store is responsible for a slice of the application state
pub mod app_logs_store;
pub mod credentials_store;
pub mod dashboard_store;
pub mod session_store;
pub mod ui_store;

pub use app_logs_store::AppLogsStore;
pub use credentials_store::CredentialsStore;
pub use dashboard_store::DashboardStore;
pub use session_store::SessionStore;
pub use ui_store::UIStore;
