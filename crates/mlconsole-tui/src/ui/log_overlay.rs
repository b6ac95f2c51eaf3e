/// Developer log overlay drawn on top of the dashboard
use crate::stores::app_logs_store::AppLogsState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct LogOverlay<'a> {
    logs: &'a [String],
    scroll_offset: usize,
}

impl<'a> LogOverlay<'a> {
    pub fn from_state(app_logs_state: &'a AppLogsState) -> Self {
        Self {
            logs: &app_logs_state.logs,
            scroll_offset: app_logs_state.scroll_offset,
        }
    }

    /// Visible slice of the log, newest at the bottom. `scroll_offset` counts
    /// lines scrolled up from the newest one.
    fn visible_range(&self, height: usize) -> (usize, usize) {
        let total = self.logs.len();
        let end = total.saturating_sub(self.scroll_offset).max(height.min(total));
        let start = end.saturating_sub(height);
        (start, end)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        if self.logs.is_empty() {
            Paragraph::new("No logs yet...")
                .block(overlay_block(" Application Logs ".to_string()))
                .style(Style::default().fg(Color::DarkGray))
                .render(area, buf);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize; // Subtract borders
        let (start, end) = self.visible_range(inner_height);
        let title = if self.logs.len() > inner_height {
            format!(" Application Logs [{}/{}] ", end, self.logs.len())
        } else {
            " Application Logs ".to_string()
        };

        let visible: Vec<Line> = self.logs[start..end]
            .iter()
            .map(|log| Line::from(log.as_str()))
            .collect();

        Paragraph::new(visible)
            .block(overlay_block(title))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

fn overlay_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan))
}
