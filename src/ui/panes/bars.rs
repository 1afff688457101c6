//! Array pane rendering
//!
//! Draws the current snapshot as vertical bars. Elements tagged by the
//! current frame's operation are highlighted: yellow for a comparison, red
//! for a swap or move. Once the final frame is reached every bar turns green.

use crate::array::ElementId;
use crate::snapshot::Operation;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};
use rustc_hash::FxHashSet;

/// Data needed to render the array pane
pub struct BarsRenderData<'a> {
    pub elements: &'a [crate::array::Element],
    pub operation: Option<Operation>,
    /// The final frame is on screen
    pub finished: bool,
}

/// Render the array pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, data: BarsRenderData) {
    let block = Block::default()
        .title(" Array ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let touched: FxHashSet<ElementId> = data
        .operation
        .map(|op| op.touched().into_iter().collect())
        .unwrap_or_default();
    let highlight = match data.operation {
        Some(op) if op.is_mutation() => DEFAULT_THEME.mutation,
        _ => DEFAULT_THEME.compare,
    };

    let bars: Vec<Bar> = data
        .elements
        .iter()
        .map(|element| {
            let color = if data.finished {
                DEFAULT_THEME.success
            } else if touched.contains(&element.id) {
                highlight
            } else {
                DEFAULT_THEME.bar
            };
            Bar::default()
                .value(u64::from(element.value))
                .text_value(element.value.to_string())
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let (bar_width, bar_gap) = bar_geometry(area.width.saturating_sub(2), data.elements.len());
    let max = data
        .elements
        .iter()
        .map(|e| u64::from(e.value))
        .max()
        .unwrap_or(1);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(max);

    frame.render_widget(chart, area);
}

/// Widest bars that fit `count` elements into `width` columns
fn bar_geometry(width: u16, count: usize) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let count = count as u16;
    let gap = if width >= count * 3 { 1 } else { 0 };
    let width = (width.saturating_sub(gap * count.saturating_sub(1)) / count).max(1);
    (width, gap)
}

#[cfg(test)]
mod tests {
    use super::bar_geometry;

    #[test]
    fn test_bar_geometry_fits() {
        for count in 1..=35usize {
            for width in [20u16, 40, 80, 200] {
                let (w, g) = bar_geometry(width, count);
                let used = w * count as u16 + g * (count as u16 - 1);
                assert!(w >= 1);
                assert!(used <= width || w == 1);
            }
        }
        assert_eq!(bar_geometry(80, 0), (1, 0));
    }
}
