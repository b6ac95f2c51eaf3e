/// Data Transformation tab: drop or encode features of the dataset
use crate::actions::{ButtonId, FieldId, TabId};
use crate::focus::View;
use crate::stores::dashboard_store::DashboardState;
use crate::stores::ui_store::UIState;
use crate::ui::form::{FormFocus, render_fields, render_message};
use crate::ui::ingestion_panel::selected_file_line;
use mlconsole_core::operations::MessageChannel;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Widget},
};

pub struct TransformationPanel<'a> {
    state: &'a DashboardState,
    focus: FormFocus,
}

impl<'a> TransformationPanel<'a> {
    pub fn new(state: &'a DashboardState, ui_state: &UIState) -> Self {
        Self {
            state,
            focus: FormFocus::new(View::Dashboard(TabId::DataTransformation), ui_state),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) -> Option<Position> {
        let (cursor, rest) = render_fields(
            &self.focus,
            &[
                (FieldId::RemoveFeatures, &self.state.remove_features),
                (FieldId::ConvertToNumbers, &self.state.convert_to_numbers),
            ],
            area,
            buf,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Hint
                Constraint::Length(1), // Selected file
                Constraint::Length(1), // Source model
                Constraint::Length(2), // Message
                Constraint::Min(0),
            ])
            .split(rest);

        Paragraph::new("Comma-separated features. Enter in a field applies it.")
            .style(Style::default().fg(Color::DarkGray))
            .render(chunks[0], buf);
        Paragraph::new(selected_file_line(self.state)).render(chunks[1], buf);

        let source = self
            .state
            .transform_source()
            .unwrap_or("none, train models first");
        Paragraph::new(
            self.focus
                .button(ButtonId::CycleSourceModel, &format!("Source model: {}", source)),
        )
        .render(chunks[2], buf);

        render_message(
            self.state.message(MessageChannel::Transformation),
            chunks[3],
            buf,
        );

        cursor
    }
}
