/// Layout manager for the TUI application
use crate::actions::TabId;
use crate::focus::{View, current_view};
use crate::stores::{AppLogsStore, CredentialsStore, DashboardStore, SessionStore, UIStore};
use crate::stores::ui_store::UIState;
use crate::ui::{
    FreezePanel, IngestionPanel, LogOverlay, LoginPanel, TrainingPanel, TransformationPanel,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Widget},
};

/// Render the complete application layout
pub fn render_layout(
    frame: &mut Frame,
    session_store: &SessionStore,
    credentials_store: &CredentialsStore,
    dashboard_store: &DashboardStore,
    ui_store: &UIStore,
    app_logs_store: &AppLogsStore,
) {
    let area = frame.area();
    let session = session_store.get_state();
    let credentials = credentials_store.get_state();
    let ui_state = ui_store.get_state();
    let view = current_view(&session, &credentials, &ui_state);

    // Main layout: Header | Content | Footer
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(frame, vertical_chunks[0], session.is_logged_in());

    let cursor = match view {
        View::Login(_) => {
            let panel_area = centered_rect(60, 80, vertical_chunks[1]);
            LoginPanel::new(&credentials, &ui_state).render(panel_area, frame.buffer_mut())
        }
        View::Dashboard(tab) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Tabs
                    Constraint::Min(0),    // Tab content
                ])
                .split(vertical_chunks[1]);
            render_tabs(frame, chunks[0], tab);

            let block = Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", tab.title()));
            let content = block.inner(chunks[1]);
            frame.render_widget(block, chunks[1]);

            let dashboard = dashboard_store.get_state();
            let buf = frame.buffer_mut();
            match tab {
                TabId::DataIngestion => IngestionPanel::new(&dashboard, &ui_state).render(content, buf),
                TabId::DataTransformation => {
                    TransformationPanel::new(&dashboard, &ui_state).render(content, buf)
                }
                TabId::AutoTrain => TrainingPanel::new(&dashboard, &ui_state).render(content, buf),
                TabId::Freeze => {
                    FreezePanel::new(&dashboard, &ui_state).render(content, buf);
                    None
                }
            }
        }
    };

    render_footer(frame, vertical_chunks[2], view, &ui_state);

    if ui_state.show_logs {
        let app_logs_state = app_logs_store.get_state();
        LogOverlay::from_state(&app_logs_state)
            .render(centered_rect(90, 80, area), frame.buffer_mut());
    } else if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, active_tab: TabId) {
    let tab_titles: Vec<String> = TabId::ALL
        .iter()
        .map(|tab| format!("{}: {}", tab.index() + 1, tab.title()))
        .collect();

    let tabs = Tabs::new(tab_titles)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(active_tab.index())
        .divider("|");

    frame.render_widget(tabs, area);
}

fn render_header(frame: &mut Frame, area: Rect, is_logged_in: bool) {
    let (status, status_color) = if is_logged_in {
        ("Signed in", Color::Green)
    } else {
        ("Signed out", Color::Yellow)
    };

    let header_text = Line::from(vec![
        Span::styled(
            " ML CONSOLE ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(status, Style::default().fg(status_color)),
    ]);

    Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL))
        .render(area, frame.buffer_mut());
}

fn render_footer(frame: &mut Frame, area: Rect, view: View, ui_state: &UIState) {
    let help_text = if ui_state.editing {
        "Enter:Commit | Esc:Stop editing | ←/→:Move cursor"
    } else if ui_state.show_logs {
        "j/k:Scroll | PgUp/PgDn:Page | L/Esc:Close logs | q:Quit"
    } else {
        match view {
            View::Login(_) => "Tab/j/k:Move | Enter:Edit/Press | q:Quit",
            View::Dashboard(_) => {
                "1-4:Switch Tab | Tab/j/k:Move | Enter:Edit/Press | o:Logout | L:Logs | q:Quit"
            }
        }
    };

    let footer_text = Line::from(vec![Span::raw(" "), Span::raw(help_text)]);

    Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL))
        .render(area, frame.buffer_mut());
}

/// Helper function to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
