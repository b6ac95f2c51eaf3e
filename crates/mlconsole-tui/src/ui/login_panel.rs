/// Sign-in / sign-up form shown while logged out
use crate::actions::{ButtonId, FieldId};
use crate::focus::View;
use crate::stores::credentials_store::CredentialsState;
use crate::stores::ui_store::UIState;
use crate::ui::form::{FormFocus, render_fields};
use mlconsole_core::credentials::AuthMode;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct LoginPanel<'a> {
    state: &'a CredentialsState,
    focus: FormFocus,
}

impl<'a> LoginPanel<'a> {
    pub fn new(state: &'a CredentialsState, ui_state: &UIState) -> Self {
        Self {
            state,
            focus: FormFocus::new(View::Login(state.mode), ui_state),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) -> Option<Position> {
        let title = match self.state.mode {
            AuthMode::SignIn => " Sign In ",
            AuthMode::SignUp => " Sign Up ",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        let fields = match self.state.mode {
            AuthMode::SignIn => vec![
                (FieldId::Username, &self.state.username),
                (FieldId::Password, &self.state.password),
            ],
            AuthMode::SignUp => vec![
                (FieldId::Username, &self.state.username),
                (FieldId::Email, &self.state.email),
                (FieldId::Password, &self.state.password),
                (FieldId::ConfirmPassword, &self.state.confirm_password),
            ],
        };
        let (cursor, rest) = render_fields(&self.focus, &fields, inner, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Error
                Constraint::Length(1), // Submit
                Constraint::Length(1),
                Constraint::Length(1), // Mode toggle
                Constraint::Min(0),
            ])
            .split(rest);

        if let Some(error) = &self.state.error {
            Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .render(chunks[0], buf);
        }

        Paragraph::new(
            self.focus
                .button(ButtonId::SubmitCredentials, self.state.mode.submit_label()),
        )
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

        Paragraph::new(
            self.focus
                .button(ButtonId::ToggleAuthMode, self.state.mode.toggle_label()),
        )
        .alignment(Alignment::Center)
        .render(chunks[3], buf);

        cursor
    }
}
