/// UI module - panels and rendering components
pub mod form;
pub mod freeze_panel;
pub mod ingestion_panel;
pub mod layout;
pub mod log_overlay;
pub mod login_panel;
pub mod results_list;
pub mod training_panel;
pub mod transformation_panel;

pub use freeze_panel::FreezePanel;
pub use ingestion_panel::IngestionPanel;
pub use layout::render_layout;
pub use log_overlay::LogOverlay;
pub use login_panel::LoginPanel;
pub use results_list::ResultsList;
pub use training_panel::TrainingPanel;
pub use transformation_panel::TransformationPanel;
