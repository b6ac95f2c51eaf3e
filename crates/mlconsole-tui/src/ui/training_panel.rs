/// Auto Train tab: training parameters and the train button
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
    widgets::{Paragraph, Widget},
};

pub struct TrainingPanel<'a> {
    state: &'a DashboardState,
    focus: FormFocus,
}

impl<'a> TrainingPanel<'a> {
    pub fn new(state: &'a DashboardState, ui_state: &UIState) -> Self {
        Self {
            state,
            focus: FormFocus::new(View::Dashboard(TabId::AutoTrain), ui_state),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) -> Option<Position> {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let (cursor, rest) = render_fields(
            &self.focus,
            &[
                (FieldId::TrainingPercentage, &self.state.training_percentage),
                (FieldId::TestingPercentage, &self.state.testing_percentage),
                (FieldId::Criterion, &self.state.criterion),
                (FieldId::MaxDepth, &self.state.max_depth),
                (FieldId::NEstimators, &self.state.n_estimators),
            ],
            halves[0],
            buf,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Train button
                Constraint::Min(0),    // Message
            ])
            .split(rest);

        Paragraph::new(self.focus.button(ButtonId::TrainModels, "Train Models"))
            .render(chunks[0], buf);
        render_message(
            self.state.message(MessageChannel::Training),
            chunks[1],
            buf,
        );
        ResultsList::new(self.state.results.as_ref()).render(halves[1], buf);

        cursor
    }
}
