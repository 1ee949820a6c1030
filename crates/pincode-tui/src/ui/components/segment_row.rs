//! Row of single-character segment boxes
//!
//! Long rows wrap onto as many lines as the area width requires. When the
//! lines do not fit the area height, a window of lines around the focused box
//! is shown with a count of the lines hidden above and below.

use pincode_core::SegmentList;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::Theme;

/// Outer width of one box
pub const BOX_WIDTH: u16 = 5;
/// Outer height of one box
pub const BOX_HEIGHT: u16 = 3;
/// Space between boxes
const GAP: u16 = 1;

/// Glyph shown for a filled box while masked
const MASK: char = '●';

/// Segment boxes for the whole row
pub struct SegmentRow<'a> {
    pub segments: &'a SegmentList,
    pub focused: Option<usize>,
    pub hidden: bool,
    pub disabled: bool,
}

/// How many boxes fit side by side in `width` columns
pub fn boxes_per_line(width: u16) -> usize {
    usize::from(width.saturating_add(GAP) / (BOX_WIDTH + GAP)).max(1)
}

/// Lines needed to show `count` boxes in `width` columns
pub fn lines_needed(count: usize, width: u16) -> u16 {
    u16::try_from(count.div_ceil(boxes_per_line(width))).unwrap_or(u16::MAX)
}

/// Rows of terminal cells needed to show `count` boxes in `width` columns
pub fn height_needed(count: usize, width: u16) -> u16 {
    lines_needed(count, width).saturating_mul(BOX_HEIGHT)
}

/// Text shown inside a box
pub fn display_char(value: Option<char>, hidden: bool) -> char {
    match value {
        Some(_) if hidden => MASK,
        Some(c) => c,
        None => ' ',
    }
}

/// Width of `boxes` boxes laid side by side
fn span(boxes: usize) -> u16 {
    u16::try_from(boxes)
        .unwrap_or(u16::MAX)
        .saturating_mul(BOX_WIDTH + GAP)
        .saturating_sub(GAP)
}

/// First line and number of lines shown out of `total_lines` in `height`
/// rows, keeping `focused_line` inside the window.
///
/// When not every line fits, one row is kept back for the scroll indicator.
pub fn visible_window(
    total_lines: usize,
    height: u16,
    focused_line: Option<usize>,
) -> (usize, usize) {
    let all_rows = u16::try_from(total_lines)
        .unwrap_or(u16::MAX)
        .saturating_mul(BOX_HEIGHT);
    if all_rows <= height {
        return (0, total_lines);
    }

    let visible = usize::from(height.saturating_sub(1) / BOX_HEIGHT)
        .max(1)
        .min(total_lines);
    let first = focused_line
        .map_or(0, |line| line.saturating_sub(visible / 2))
        .min(total_lines - visible);
    (first, visible)
}

/// Indicator text for lines hidden above and below the window
fn scroll_hint(above: usize, below: usize) -> String {
    let mut parts = Vec::new();
    if above > 0 {
        parts.push(format!("↑ {} more", above));
    }
    if below > 0 {
        parts.push(format!("↓ {} more", below));
    }
    parts.join("   ")
}

impl SegmentRow<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let per_line = boxes_per_line(area.width);
        let segments: Vec<_> = self.segments.iter().collect();
        let total_lines = segments.len().div_ceil(per_line);
        let focused_line = self.focused.map(|index| index / per_line);
        let (first, visible) = visible_window(total_lines, area.height, focused_line);

        let lines = segments.chunks(per_line).skip(first).take(visible);
        for (offset, chunk) in lines.enumerate() {
            let y = area.y.saturating_add(
                u16::try_from(offset)
                    .unwrap_or(u16::MAX)
                    .saturating_mul(BOX_HEIGHT),
            );
            let x0 = area.x + area.width.saturating_sub(span(chunk.len())) / 2;

            for (col, segment) in chunk.iter().enumerate() {
                let x = x0.saturating_add(
                    u16::try_from(col)
                        .unwrap_or(u16::MAX)
                        .saturating_mul(BOX_WIDTH + GAP),
                );
                let cell = Rect::new(x, y, BOX_WIDTH, BOX_HEIGHT).intersection(area);
                if cell.width < BOX_WIDTH || cell.height < BOX_HEIGHT {
                    continue;
                }
                let focused = self.focused == Some(segment.index);

                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_for(focused, self.disabled));

                let text = display_char(segment.value, self.hidden).to_string();
                let widget = Paragraph::new(text)
                    .style(theme.segment(focused, self.disabled))
                    .alignment(Alignment::Center)
                    .block(block);
                frame.render_widget(widget, cell);
            }
        }

        let below = total_lines - first - visible;
        if (first > 0 || below > 0) && area.height > 0 {
            let hint_area = Rect {
                y: area.bottom() - 1,
                height: 1,
                ..area
            };
            let hint = Paragraph::new(scroll_hint(first, below))
                .style(theme.text_muted())
                .alignment(Alignment::Center);
            frame.render_widget(hint, hint_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxes_per_line() {
        assert_eq!(boxes_per_line(5), 1);
        assert_eq!(boxes_per_line(11), 2);
        assert_eq!(boxes_per_line(60), 10);
        assert_eq!(boxes_per_line(0), 1);
    }

    #[test]
    fn test_rows_wrap() {
        assert_eq!(lines_needed(5, 80), 1);
        assert_eq!(lines_needed(200, 80), 16);
        assert_eq!(height_needed(200, 80), 48);
    }

    #[test]
    fn test_display_char_masks_filled_only() {
        assert_eq!(display_char(Some('7'), false), '7');
        assert_eq!(display_char(Some('7'), true), '●');
        assert_eq!(display_char(None, true), ' ');
    }

    #[test]
    fn test_window_shows_everything_when_it_fits() {
        assert_eq!(visible_window(1, 3, None), (0, 1));
        assert_eq!(visible_window(4, 12, Some(3)), (0, 4));
    }

    #[test]
    fn test_window_follows_focused_line() {
        // 17 lines in 13 rows: 4 lines plus the indicator row
        assert_eq!(visible_window(17, 13, None), (0, 4));
        assert_eq!(visible_window(17, 13, Some(1)), (0, 4));
        assert_eq!(visible_window(17, 13, Some(12)), (10, 4));
        assert_eq!(visible_window(17, 13, Some(16)), (13, 4));
    }

    #[test]
    fn test_window_keeps_one_line_in_tiny_area() {
        assert_eq!(visible_window(5, 2, Some(3)), (3, 1));
    }

    #[test]
    fn test_scroll_hint() {
        assert_eq!(scroll_hint(2, 0), "↑ 2 more");
        assert_eq!(scroll_hint(0, 3), "↓ 3 more");
        assert_eq!(scroll_hint(1, 1), "↑ 1 more   ↓ 1 more");
    }
}
