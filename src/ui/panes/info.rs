//! Title and settings panes

use crate::sorting::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the settings line
pub struct InfoRenderData {
    pub elements: usize,
    pub max_elements: usize,
    pub speed_label: String,
    pub seed: u64,
    pub logical_step: usize,
    pub desired_step: usize,
    pub step_limit: usize,
}

/// Render the algorithm title, or usage instructions before one is chosen
pub fn render_title_pane(frame: &mut Frame, area: Rect, algorithm: Option<Algorithm>) {
    let line = match algorithm {
        Some(algo) => Line::from(Span::styled(
            algo.title(),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            "Choose a sorting algorithm with 'a'",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    };

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM).border_style(
            Style::default().fg(DEFAULT_THEME.border_normal),
        ));
    frame.render_widget(paragraph, area);
}

/// Render the settings and step counter line
pub fn render_info_pane(frame: &mut Frame, area: Rect, data: InfoRenderData) {
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.fg);

    let mut spans = vec![
        Span::styled("Elements ", label),
        Span::styled(format!("{}/{}", data.elements, data.max_elements), value),
        Span::styled("  Speed ", label),
        Span::styled(data.speed_label, value),
        Span::styled("  Seed ", label),
        Span::styled(format!("{:016x}", data.seed), value),
        Span::styled("  Step ", label),
        Span::styled(format!("{}", data.logical_step), value),
    ];
    if data.desired_step != data.logical_step {
        spans.push(Span::styled(
            format!(" → {}", data.desired_step),
            Style::default().fg(DEFAULT_THEME.secondary),
        ));
    }
    spans.push(Span::styled(format!(" of {}", data.step_limit), label));

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
