/// Freeze tab: persist every trained model
use crate::actions::{ButtonId, TabId};
use crate::focus::View;
use crate::stores::dashboard_store::DashboardState;
use crate::stores::ui_store::UIState;
use crate::ui::form::{FormFocus, render_message};
use mlconsole_core::operations::MessageChannel;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct FreezePanel<'a> {
    state: &'a DashboardState,
    focus: FormFocus,
}

impl<'a> FreezePanel<'a> {
    pub fn new(state: &'a DashboardState, ui_state: &UIState) -> Self {
        Self {
            state,
            focus: FormFocus::new(View::Dashboard(TabId::Freeze), ui_state),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Freeze button
                Constraint::Length(2), // Message
                Constraint::Min(3),    // Models to freeze
            ])
            .split(area);

        Paragraph::new(self.focus.button(ButtonId::FreezeModels, "Freeze Models"))
            .render(chunks[0], buf);
        render_message(self.state.message(MessageChannel::Freeze), chunks[1], buf);

        let lines: Vec<Line> = self
            .state
            .results
            .as_ref()
            .map(|results| {
                results
                    .model_paths()
                    .into_iter()
                    .map(|(name, path)| Line::from(format!("{name} -> {path}")))
                    .collect()
            })
            .unwrap_or_default();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Models to freeze ");
        if lines.is_empty() {
            Paragraph::new("No trained models")
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .render(chunks[2], buf);
        } else {
            Paragraph::new(lines).block(block).render(chunks[2], buf);
        }
    }
}
