/// Per-model metrics from the latest ingest or train
use mlconsole_core::models::ModelResults;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct ResultsList<'a> {
    results: Option<&'a ModelResults>,
}

impl<'a> ResultsList<'a> {
    pub fn new(results: Option<&'a ModelResults>) -> Self {
        Self { results }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Results ")
            .border_style(Style::default().fg(Color::White));

        let lines: Vec<Line> = match self.results {
            Some(results) if !results.is_empty() => results
                .summary_lines()
                .into_iter()
                .map(Line::from)
                .collect(),
            _ => {
                return Paragraph::new("No results yet")
                    .block(block)
                    .style(Style::default().fg(Color::DarkGray))
                    .render(area, buf);
            }
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
