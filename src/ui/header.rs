use crate::content::Collection;
use crate::loader::CollectionResult;
use crate::ui::theme::{self, TagShape, TextVariant, Tone, GLOBAL_BORDER, STATUS_ERROR, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Brand line with the listing tabs and a fetch status marker.
pub struct Header {
    active: Collection,
    loading: bool,
    failed: bool,
}

impl Header {
    pub fn new<T>(active: Collection, listing: &CollectionResult<T>) -> Self {
        Self {
            active,
            loading: listing.loading,
            failed: listing.is_failed(),
        }
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::raw("  "),
            theme::text("Showcase", TextVariant::Heading, Tone::Primary),
            Span::styled("  │ ", Style::default().fg(GLOBAL_BORDER)),
        ];
        for collection in Collection::LISTINGS {
            let tone = if collection == self.active {
                Tone::Accent
            } else {
                Tone::Muted
            };
            spans.push(Span::raw(" "));
            spans.push(theme::tag(collection.label(), tone, TagShape::Square));
        }
        spans.push(Span::styled("  │  ", Style::default().fg(GLOBAL_BORDER)));
        spans.push(self.status());
        Line::from(spans)
    }

    pub fn widget(&self) -> Paragraph<'static> {
        Paragraph::new(self.line()).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    fn status(&self) -> Span<'static> {
        if self.loading {
            theme::text("loading…", TextVariant::Caption, Tone::Muted)
        } else if self.failed {
            Span::styled("● offline", Style::default().fg(STATUS_ERROR))
        } else {
            Span::styled("● live", Style::default().fg(STATUS_OK))
        }
    }
}
