/// Building blocks shared by every form-like panel
use crate::actions::{ButtonId, FieldId, FocusItem};
use crate::common::{FieldBox, TextField};
use crate::focus::{View, focused_item};
use crate::stores::ui_store::UIState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

/// Height of one bordered input box
pub const FIELD_HEIGHT: u16 = 3;

/// What has keyboard focus in the view being drawn
#[derive(Debug, Clone, Copy)]
pub struct FormFocus {
    focused: Option<FocusItem>,
    editing: bool,
}

impl FormFocus {
    pub fn new(view: View, ui_state: &UIState) -> Self {
        Self {
            focused: focused_item(view, ui_state.focus_index),
            editing: ui_state.editing,
        }
    }

    pub fn is_focused(&self, item: FocusItem) -> bool {
        self.focused == Some(item)
    }

    pub fn field_box<'a>(&self, id: FieldId, field: &'a TextField) -> FieldBox<'a> {
        FieldBox {
            label: id.label(),
            field,
            is_focused: self.is_focused(FocusItem::Field(id)),
            is_editing: self.editing,
            masked: id.is_masked(),
        }
    }

    pub fn button(&self, id: ButtonId, label: &str) -> Line<'static> {
        button_line(label, self.is_focused(FocusItem::Button(id)))
    }
}

pub fn button_line(label: &str, is_focused: bool) -> Line<'static> {
    let style = if is_focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Line::from(Span::styled(format!("[ {} ]", label), style))
}

/// Status line under a form. Empty messages draw nothing.
pub fn render_message(message: &str, area: Rect, buf: &mut Buffer) {
    if message.is_empty() {
        return;
    }
    Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Yellow))
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

/// Render `fields` stacked from the top of `area`, returning the cursor of
/// whichever one is being edited and the space left below them
pub fn render_fields(
    focus: &FormFocus,
    fields: &[(FieldId, &TextField)],
    area: Rect,
    buf: &mut Buffer,
) -> (Option<Position>, Rect) {
    let mut constraints: Vec<Constraint> =
        fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)).collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut cursor = None;
    for (i, (id, field)) in fields.iter().enumerate() {
        if let Some(position) = focus.field_box(*id, field).render(chunks[i], buf) {
            cursor = Some(position);
        }
    }
    (cursor, chunks[fields.len()])
}
