pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    selected_index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_offset_when_everything_fits() {
        assert_eq!(scroll_offset(10, 20, 9), 0);
    }

    #[test]
    fn offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(40, 10, 9), 9);
        assert_eq!(scroll_offset(40, 10, 10), 1);
        assert_eq!(scroll_offset(40, 10, 39), 30);
    }
}
