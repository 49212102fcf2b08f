//! Layout helpers shared across UI components.

use ratatui::prelude::*;

/// Creates a centered rectangular area within a given rectangle.
///
/// Dimensions are percentages of the parent. Used for modal dialogs.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}

/// Finds the index of the child rect containing the given position, provided
/// the position also falls inside the container. Used for mouse hit testing.
pub fn find_target_index_by_mouse_position(container: &Rect, children: &[Rect], x: u16, y: u16) -> Option<usize> {
    let position = Position { x, y };
    if !container.contains(position) {
        return None;
    }
    children.iter().position(|rect| rect.contains(position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_respects_container() {
        let container = Rect::new(0, 0, 10, 10);
        let children = vec![Rect::new(0, 0, 10, 3), Rect::new(0, 3, 10, 3)];
        assert_eq!(find_target_index_by_mouse_position(&container, &children, 2, 1), Some(0));
        assert_eq!(find_target_index_by_mouse_position(&container, &children, 2, 4), Some(1));
        assert_eq!(find_target_index_by_mouse_position(&container, &children, 50, 4), None);
    }
}
