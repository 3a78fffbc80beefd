//! Expression input line rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the input pane. The terminal cursor is placed at `cursor` (a char
/// index into `input`) while the pane has focus.
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    cursor: usize,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Expression ")
        .borders(Borders::ALL)
        .border_style(border_style);

    // Scroll horizontally so the cursor stays visible
    let width = area.width.saturating_sub(2).max(1) as usize;
    let skip = cursor.saturating_sub(width - 1);
    let visible: String = input.chars().skip(skip).take(width).collect();

    let paragraph = Paragraph::new(visible)
        .block(block)
        .style(Style::default().fg(DEFAULT_THEME.fg));
    frame.render_widget(paragraph, area);

    if is_focused {
        let x = area.x + 1 + (cursor - skip) as u16;
        frame.set_cursor_position((x, area.y + 1));
    }
}
