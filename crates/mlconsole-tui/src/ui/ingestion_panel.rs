/// Data Ingestion tab: choose a dataset and upload it
use crate::actions::{ButtonId, FieldId, TabId};
use crate::focus::View;
use crate::stores::dashboard_store::DashboardState;
use crate::stores::ui_store::UIState;
use crate::ui::ResultsList;
use crate::ui::form::{FormFocus, render_fields, render_message};
use mlconsole_core::operations::MessageChannel;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct IngestionPanel<'a> {
    state: &'a DashboardState,
    focus: FormFocus,
}

impl<'a> IngestionPanel<'a> {
    pub fn new(state: &'a DashboardState, ui_state: &UIState) -> Self {
        Self {
            state,
            focus: FormFocus::new(View::Dashboard(TabId::DataIngestion), ui_state),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) -> Option<Position> {
        let (cursor, rest) = render_fields(
            &self.focus,
            &[(FieldId::FilePath, &self.state.file_path)],
            area,
            buf,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Selected file
                Constraint::Length(1), // Ingest button
                Constraint::Length(2), // Message
                Constraint::Min(3),    // Results
            ])
            .split(rest);

        Paragraph::new(selected_file_line(self.state)).render(chunks[0], buf);
        Paragraph::new(self.focus.button(ButtonId::Ingest, "Ingest")).render(chunks[1], buf);
        render_message(
            self.state.message(MessageChannel::Training),
            chunks[2],
            buf,
        );
        ResultsList::new(self.state.results.as_ref()).render(chunks[3], buf);

        cursor
    }
}

pub fn selected_file_line(state: &DashboardState) -> Line<'static> {
    let (text, color) = match &state.selected_file {
        Some(path) => (path.display().to_string(), Color::Green),
        None => ("none".to_string(), Color::DarkGray),
    };
    Line::from(vec![
        Span::raw("Selected file: "),
        Span::styled(text, Style::default().fg(color)),
    ])
}
