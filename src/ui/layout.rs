use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the testimonial carousel panel, borders included.
pub const CAROUSEL_HEIGHT: u16 = 7;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into the listing panel and the carousel panel below it.
pub fn body_panels(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(CAROUSEL_HEIGHT)])
        .split(body);
    (chunks[0], chunks[1])
}

/// `area` moved sideways by `position` viewport widths and clipped to
/// `area`. Returns an empty rect once the content is fully off screen.
pub fn shifted_rect(area: Rect, position: f32) -> Rect {
    let position = position.clamp(-1.0, 1.0);
    let shift = (f32::from(area.width) * position.abs()).round() as u16;
    let width = area.width.saturating_sub(shift);
    let x = if position > 0.0 { area.x + shift } else { area.x };
    Rect {
        x,
        y: area.y,
        width,
        height: if width == 0 { 0 } else { area.height },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_area() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.height, 18);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn carousel_panel_has_fixed_height() {
        let (listing, carousel) = body_panels(Rect::new(0, 3, 80, 18));
        assert_eq!(carousel.height, CAROUSEL_HEIGHT);
        assert_eq!(listing.height, 18 - CAROUSEL_HEIGHT);
    }

    #[test]
    fn centered_rect_is_unchanged() {
        let area = Rect::new(2, 10, 40, 5);
        assert_eq!(shifted_rect(area, 0.0), area);
    }

    #[test]
    fn shift_left_keeps_origin_and_narrows() {
        let shifted = shifted_rect(Rect::new(0, 0, 40, 5), -0.5);
        assert_eq!(shifted, Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn shift_right_moves_origin() {
        let shifted = shifted_rect(Rect::new(0, 0, 40, 5), 0.25);
        assert_eq!(shifted, Rect::new(10, 0, 30, 5));
    }

    #[test]
    fn fully_off_screen_is_empty() {
        assert_eq!(shifted_rect(Rect::new(0, 0, 40, 5), 1.0).area(), 0);
        assert_eq!(shifted_rect(Rect::new(0, 0, 40, 5), -1.0).area(), 0);
    }
}
