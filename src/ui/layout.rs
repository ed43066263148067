use ratatui::layout::Rect;

/// Splits the screen into the counter body and a three-line footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect) {
    let footer_height = area.height.min(3);
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(footer_height),
    };
    (body, footer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_takes_bottom_three_rows() {
        let (body, footer) = layout_regions(Rect::new(0, 0, 40, 10));
        assert_eq!(body, Rect::new(0, 0, 40, 7));
        assert_eq!(footer, Rect::new(0, 7, 40, 3));
    }

    #[test]
    fn tiny_area_is_all_footer() {
        let (body, footer) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 2);
    }
}
