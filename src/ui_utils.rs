use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, ListState},
};

/// Creates a ListState with proper bounds checking
pub fn create_list_state(selected: usize, item_count: usize) -> ListState {
    if item_count == 0 {
        return ListState::default();
    }
    ListState::default().with_selected(Some(selected.min(item_count - 1)))
}

/// Creates a block with conditional focus styling (yellow border when focused)
pub fn focused_block(title: &str, is_focused: bool) -> Block<'_> {
    let block = Block::bordered().title(title);
    if is_focused {
        block.border_style(Style::new().yellow())
    } else {
        block
    }
}

/// A `label: value` line for a form field; the focused field gets a cursor.
pub fn input_line<'a>(label: &'a str, value: &str, focused: bool, editing: bool) -> Line<'a> {
    let marker = if focused { ">> " } else { "   " };
    let cursor = if editing { "▏" } else { "" };
    let label_style = if focused {
        Style::new().yellow().bold()
    } else {
        Style::new().gray()
    };
    Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("{label}: "), label_style),
        Span::raw(format!("{value}{cursor}")),
    ])
}

/// Centers a `width` x `height` box inside `area`, shrinking it to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}
