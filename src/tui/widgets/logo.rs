//! Logo widget for ratatui surfaces.
//!
//! Turns the banner's decoded styled runs into `Span`s and paints them
//! centered in the given area. This is the non-terminal rendering path:
//! no escape codes reach the buffer, only `{text, color}` pairs.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::banner::Banner;
use crate::decode::StyledRun;
use crate::theme::Theme;

/// Centered logo widget.
#[derive(Debug, Clone, Default)]
pub struct Logo {
    banner: Banner,
}

impl Logo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            banner: Banner::new(theme),
        }
    }
}

/// One decoded row as a ratatui line.
fn to_line(runs: Vec<StyledRun>) -> Line<'static> {
    let spans: Vec<Span<'static>> = runs
        .into_iter()
        .map(|run| match run.color {
            Some(rgb) => Span::styled(run.text, Style::default().fg(Color::Rgb(rgb.r, rgb.g, rgb.b))),
            None => Span::raw(run.text),
        })
        .collect();
    Line::from(spans)
}

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let plain = self.banner.plain_lines();
        let rows = plain.len() as u16;
        if area.height == 0 || area.width == 0 {
            return;
        }

        // All rows share one width; center the block as a whole.
        let logo_width = plain.first().map(|l| l.width() as u16).unwrap_or(0);
        let x = area.x + area.width.saturating_sub(logo_width) / 2;
        let y = area.y + area.height.saturating_sub(rows) / 2;

        for (i, runs) in self.banner.styled_lines().into_iter().enumerate() {
            let row_y = y + i as u16;
            if row_y >= area.y + area.height {
                break;
            }
            let line = to_line(runs);
            buf.set_line(x, row_y, &line, area.width.saturating_sub(x - area.x));
        }
    }
}
