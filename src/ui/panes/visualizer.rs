//! Per-algorithm visualizer pane rendering

use crate::step::{Role, Step};
use crate::ui::app::Visualizer;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

/// Render one visualizer pane: input line, arrow markers, the value blocks
/// of the current snapshot, and the insertion-key readout.
pub fn render_visualizer_pane(
    frame: &mut Frame,
    area: Rect,
    viz: &Visualizer,
    is_focused: bool,
    is_editing: bool,
    edit_buffer: &str,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {} ", viz.session.algorithm()))
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    let mut lines = vec![input_line(viz, is_editing, edit_buffer), Line::default()];

    match &viz.shown {
        Some(step) => {
            let width = block_width(step);
            lines.push(arrow_line(step, width));
            lines.push(value_line(step, width));
            lines.push(key_line(step));
        }
        None => {
            lines.push(Line::styled(
                "(no sequence loaded)",
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// The committed input, or the edit buffer with a cursor mark while editing
fn input_line<'a>(viz: &'a Visualizer, is_editing: bool, edit_buffer: &'a str) -> Line<'a> {
    let label = Span::styled("Input: ", Style::default().fg(DEFAULT_THEME.comment));

    if is_editing {
        return Line::from(vec![
            label,
            Span::styled(
                edit_buffer.to_string(),
                Style::default().fg(DEFAULT_THEME.secondary),
            ),
            Span::styled(
                "▏",
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ]);
    }

    if viz.input.is_empty() {
        Line::from(vec![
            label,
            Span::styled(
                "(press e to enter a sequence)",
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ])
    } else {
        Line::from(vec![
            label,
            Span::styled(viz.input.as_str(), Style::default().fg(DEFAULT_THEME.fg)),
        ])
    }
}

/// Widest formatted value in the snapshot; every block is padded to it
fn block_width(step: &Step) -> usize {
    step.cells
        .iter()
        .map(|c| c.value.to_string().len())
        .max()
        .unwrap_or(1)
}

/// Pointer arrows above every highlighted block
fn arrow_line(step: &Step, width: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(step.cells.len() * 2);
    for cell in &step.cells {
        let marker = if cell.role == Role::None { " " } else { "⇩" };
        spans.push(Span::styled(
            format!(" {:^width$} ", marker, width = width),
            Style::default().fg(role_color(cell.role)),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// The snapshot itself as fixed-width value blocks, colored by role
fn value_line(step: &Step, width: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(step.cells.len() * 2);
    for cell in &step.cells {
        let style = if cell.role == Role::None {
            Style::default()
                .bg(DEFAULT_THEME.cell_bg)
                .fg(DEFAULT_THEME.fg)
        } else {
            Style::default()
                .bg(role_color(cell.role))
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(
            format!(" {:^width$} ", cell.value, width = width),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// The held insertion key, when one is active
fn key_line(step: &Step) -> Line<'static> {
    match step.key {
        Some(key) => Line::from(vec![
            Span::styled("Key: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                key.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.key)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::default(),
    }
}

fn role_color(role: Role) -> Color {
    match role {
        Role::None => DEFAULT_THEME.cell_bg,
        Role::Comparing => DEFAULT_THEME.comparing,
        Role::Shifting => DEFAULT_THEME.shifting,
        Role::Key => DEFAULT_THEME.key,
    }
}
