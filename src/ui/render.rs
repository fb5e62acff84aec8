use crate::carousel::Clock;
use crate::content::{Collection, ListingEntry, Testimonial};
use crate::loader::CollectionResult;
use crate::ui::app::PreviewApp;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_panels, layout_regions, shifted_rect};
use crate::ui::theme::{self, TextVariant, Tone, ACTIVE_HIGHLIGHT, BRAND_ACCENT, GLOBAL_BORDER};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw<C: Clock>(frame: &mut Frame<'_>, app: &PreviewApp<C>) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let listing = app.listing();

    frame.render_widget(Header::new(app.active_collection(), &listing).widget(), header);
    frame.render_widget(Clear, body);

    let (listing_area, carousel_area) = body_panels(body);
    draw_listing(frame, listing_area, app.active_collection(), &listing);
    draw_carousel(frame, carousel_area, app);

    frame.render_widget(Footer::new().widget(footer), footer);
}

fn panel(title: String) -> Block<'static> {
    Block::default()
        .title(Span::styled(title, theme::text_style(TextVariant::Heading, Tone::Neutral)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn draw_listing(
    frame: &mut Frame<'_>,
    area: Rect,
    collection: Collection,
    listing: &CollectionResult<ListingEntry>,
) {
    let title = if listing.loading && !listing.items.is_empty() {
        format!(" {} (refreshing) ", collection.label())
    } else {
        format!(" {} ", collection.label())
    };
    let lines = listing_lines(collection, listing);
    frame.render_widget(
        Paragraph::new(lines)
            .block(panel(title))
            .wrap(Wrap { trim: true }),
        area,
    );
}

pub fn listing_lines(
    collection: Collection,
    listing: &CollectionResult<ListingEntry>,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(error) = &listing.error {
        lines.push(Line::from(theme::text(
            format!("Could not load {}: {error}", collection.label().to_lowercase()),
            TextVariant::Body,
            Tone::Danger,
        )));
        if let Some(hint) = &listing.error_hint {
            lines.push(Line::from(theme::text(
                hint.clone(),
                TextVariant::Caption,
                Tone::Muted,
            )));
        }
        lines.push(Line::from(theme::text(
            "Press r to try again.",
            TextVariant::Caption,
            Tone::Muted,
        )));
        if !listing.items.is_empty() {
            lines.push(Line::default());
        }
    }

    if listing.items.is_empty() {
        if listing.loading {
            lines.push(Line::from(theme::text(
                format!("Loading {}…", collection.label().to_lowercase()),
                TextVariant::Caption,
                Tone::Muted,
            )));
        } else if listing.is_empty() {
            lines.push(Line::from(theme::text(
                "Nothing published yet",
                TextVariant::Caption,
                Tone::Muted,
            )));
        }
        return lines;
    }

    for entry in &listing.items {
        let mut heading = vec![theme::text(
            entry.title.clone(),
            TextVariant::Heading,
            Tone::Neutral,
        )];
        if let Some(meta) = &entry.meta {
            heading.push(Span::raw("  "));
            heading.push(theme::text(meta.clone(), TextVariant::Caption, Tone::Muted));
        }
        lines.push(Line::from(heading));
        if let Some(subtitle) = &entry.subtitle {
            lines.push(Line::from(theme::text(
                format!("  {subtitle}"),
                TextVariant::Body,
                Tone::Muted,
            )));
        }
    }
    lines
}

fn draw_carousel<C: Clock>(frame: &mut Frame<'_>, area: Rect, app: &PreviewApp<C>) {
    let testimonials = app.testimonials();
    let carousel = app.carousel();
    let state = carousel.state();

    let title = if testimonials.items.is_empty() {
        " Testimonials ".to_string()
    } else {
        format!(
            " Testimonials {}/{} ",
            state.current_index + 1,
            testimonials.items.len()
        )
    };
    let block = panel(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(current) = testimonials.items.get(state.current_index) else {
        let message = if testimonials.loading {
            "Loading testimonials…"
        } else if testimonials.is_failed() {
            "Testimonials are unavailable right now."
        } else {
            "No testimonials yet"
        };
        frame.render_widget(
            Paragraph::new(theme::text(message, TextVariant::Caption, Tone::Muted)),
            inner,
        );
        return;
    };

    let card = shifted_rect(inner, carousel.slide_frame().position);
    if card.area() > 0 {
        frame.render_widget(
            Paragraph::new(testimonial_lines(current)).wrap(Wrap { trim: true }),
            card,
        );
    }

    if inner.height > 1 {
        let dots = Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        };
        frame.render_widget(
            Paragraph::new(indicator(testimonials.items.len(), state.current_index)),
            dots,
        );
    }
}

pub fn testimonial_lines(testimonial: &Testimonial) -> Vec<Line<'static>> {
    let mut attribution = vec![theme::text(
        format!("- {}", testimonial.author),
        TextVariant::Body,
        Tone::Accent,
    )];
    if let Some(role) = &testimonial.role {
        attribution.push(theme::text(
            format!(", {role}"),
            TextVariant::Caption,
            Tone::Muted,
        ));
    }
    vec![
        Line::from(theme::text(
            format!("\u{201c}{}\u{201d}", testimonial.quote),
            TextVariant::Body,
            Tone::Neutral,
        )),
        Line::from(attribution),
    ]
}

/// One dot per item, the current one highlighted.
pub fn indicator(count: usize, current: usize) -> Line<'static> {
    let spans = (0..count)
        .map(|idx| {
            if idx == current {
                Span::styled("● ", Style::default().fg(BRAND_ACCENT))
            } else {
                Span::styled("○ ", Style::default().fg(ACTIVE_HIGHLIGHT))
            }
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn entry(title: &str) -> ListingEntry {
        ListingEntry {
            title: title.to_string(),
            subtitle: Some("Ringkasan".to_string()),
            meta: Some("2024-05-01".to_string()),
            sort_key: None,
        }
    }

    #[test]
    fn empty_listing_says_nothing_published() {
        let listing = CollectionResult {
            items: Vec::new(),
            loading: false,
            error: None,
            error_hint: None,
        };
        let text = rendered(&listing_lines(Collection::Articles, &listing));
        assert_eq!(text, vec!["Nothing published yet".to_string()]);
    }

    #[test]
    fn first_load_shows_loading() {
        let listing = CollectionResult::<ListingEntry>::default();
        let text = rendered(&listing_lines(Collection::Partners, &listing));
        assert_eq!(text, vec!["Loading mitra…".to_string()]);
    }

    #[test]
    fn error_keeps_previous_items_visible() {
        let listing = CollectionResult {
            items: vec![entry("Belajar Rust")],
            loading: false,
            error: Some("Network Error".to_string()),
            error_hint: None,
        };
        let text = rendered(&listing_lines(Collection::Articles, &listing));
        assert_eq!(text[0], "Could not load articles: Network Error");
        assert_eq!(text[1], "Press r to try again.");
        assert!(text.iter().any(|line| line.starts_with("Belajar Rust")));
    }

    #[test]
    fn error_hint_sits_under_detailed_error() {
        let listing = CollectionResult::<ListingEntry> {
            items: Vec::new(),
            loading: false,
            error: Some("courses request failed: connection refused".to_string()),
            error_hint: Some("Could not reach the content service".to_string()),
        };
        let text = rendered(&listing_lines(Collection::Courses, &listing));
        assert_eq!(
            text,
            vec![
                "Could not load courses: courses request failed: connection refused",
                "Could not reach the content service",
                "Press r to try again.",
            ]
        );
    }

    #[test]
    fn entries_render_title_meta_and_subtitle() {
        let listing = CollectionResult {
            items: vec![entry("Kelas Data")],
            loading: false,
            error: None,
            error_hint: None,
        };
        let text = rendered(&listing_lines(Collection::Courses, &listing));
        assert_eq!(text, vec!["Kelas Data  2024-05-01", "  Ringkasan"]);
    }

    #[test]
    fn indicator_marks_current_item() {
        let line = indicator(3, 1);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "○ ● ○ ");
    }

    #[test]
    fn attribution_includes_role() {
        let lines = testimonial_lines(&Testimonial {
            id: 1,
            author: "Sari".to_string(),
            role: Some("Alumni".to_string()),
            quote: "Mantap".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        });
        assert_eq!(rendered(&lines)[1], "- Sari, Alumni");
    }
}
