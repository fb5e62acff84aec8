use crate::ui::theme::{self, ButtonSize, Tone, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HINTS: [(&str, &str); 4] = [
    ("Tab", "Listing"),
    ("←/→", "Testimonial"),
    ("r", "Reload"),
    ("q", "Quit"),
];

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let mut spans = vec![Span::raw(" ")];
        for (key, action) in HINTS {
            spans.push(theme::button(key, Tone::Neutral, ButtonSize::Small));
            spans.push(Span::styled(format!(" {action}  "), text_style));
        }
        let version = format!("v{} ", VERSION);

        // Padding by char count, not byte count
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
