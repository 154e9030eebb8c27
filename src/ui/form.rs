// Encode form rendering

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::engine::{self, QUALITY_MAX, QUALITY_MIN};
use crate::ui::state::{AppState, Focus, Status};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // input path
            Constraint::Length(3), // codec
            Constraint::Length(4), // quality (value + bar)
            Constraint::Length(3), // preset
            Constraint::Length(3), // start
            Constraint::Length(3), // command preview
            Constraint::Min(3),    // status
            Constraint::Length(1), // key bar
        ])
        .split(area);

    render_input(frame, rows[0], state);
    render_codec(frame, rows[1], state);
    render_quality(frame, rows[2], state);
    render_preset(frame, rows[3], state);
    render_start(frame, rows[4], state);
    render_preview(frame, rows[5], state);
    render_status(frame, rows[6], state);
    render_key_bar(frame, rows[7]);
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
}

fn render_input(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Input;
    let text = if state.input.is_empty() && !focused {
        Line::from(Span::styled(
            "type a path to a video file",
            Style::default().fg(Color::DarkGray),
        ))
    } else if focused {
        // Trailing block as a cursor stand-in
        Line::from(vec![Span::raw(state.input.clone()), Span::raw("█")])
    } else {
        Line::from(state.input.clone())
    };

    frame.render_widget(
        Paragraph::new(text).block(field_block("Input file", focused)),
        area,
    );
}

fn selector_line(label: &str, focused: bool) -> Line<'_> {
    let value_style = if focused {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Cyan)
    };
    Line::from(vec![
        Span::styled("◄ ", Style::default().fg(Color::DarkGray)),
        Span::styled(label.to_string(), value_style),
        Span::styled(" ►", Style::default().fg(Color::DarkGray)),
    ])
}

fn render_codec(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Codec;
    frame.render_widget(
        Paragraph::new(selector_line(state.codec.label(), focused))
            .block(field_block("Codec", focused)),
        area,
    );
}

fn render_preset(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Preset;
    frame.render_widget(
        Paragraph::new(selector_line(state.preset.as_arg(), focused))
            .block(field_block("Speed preset", focused)),
        area,
    );
}

fn render_quality(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Quality;

    let value_style = if focused {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Cyan)
    };
    let value_line = Line::from(vec![
        Span::styled(format!("{}", state.quality), value_style),
        Span::styled(
            format!(" ({QUALITY_MIN}-{QUALITY_MAX}, lower = higher fidelity)"),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let block = field_block("Quality (CRF)", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bar_width = inner.width as usize;
    let ratio = f64::from(state.quality) / f64::from(QUALITY_MAX);
    let filled = ((bar_width as f64) * ratio).round() as usize;
    let bar: String = "█".repeat(filled.min(bar_width)) + &"─".repeat(bar_width.saturating_sub(filled));
    let bar_line = Line::from(Span::styled(
        bar,
        Style::default().fg(if focused { Color::Blue } else { Color::DarkGray }),
    ));

    frame.render_widget(Paragraph::new(vec![value_line, bar_line]), inner);
}

fn render_start(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Start;
    let running = !state.runner.can_start();

    let label = if running {
        Span::styled("Encoding…", Style::default().fg(Color::DarkGray))
    } else if focused {
        Span::styled("[ Start encode ]", Style::default().fg(Color::Green).bold())
    } else {
        Span::styled("[ Start encode ]", Style::default().fg(Color::Green))
    };

    frame.render_widget(
        Paragraph::new(Line::from(label)).block(field_block("", focused)),
        area,
    );
}

fn render_preview(frame: &mut Frame, area: Rect, state: &AppState) {
    let preview = match state.params().validate() {
        Ok(request) => engine::format_cmd(&engine::build_job(&request)),
        Err(_) => String::new(),
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            preview,
            Style::default().fg(Color::DarkGray),
        )))
        .block(field_block("Command", false)),
        area,
    );
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    match &state.status {
        Status::Idle => {
            lines.push(Line::from(Span::styled(
                "Idle",
                Style::default().fg(Color::DarkGray),
            )));
        }
        Status::Running => {
            lines.push(Line::from(Span::styled(
                "Encoding… the form is locked until ffmpeg finishes",
                Style::default().fg(Color::Yellow),
            )));
        }
        Status::Succeeded { output_path } => {
            lines.push(Line::from(vec![
                Span::styled("✓ Done: ", Style::default().fg(Color::Green)),
                Span::raw(output_path.display().to_string()),
            ]));
        }
        Status::Failed { diagnostic } => {
            lines.push(Line::from(Span::styled(
                "✗ Encoding failed:",
                Style::default().fg(Color::Red),
            )));
            for l in diagnostic.lines() {
                lines.push(Line::from(Span::raw(l.to_string())));
            }
        }
        Status::ToolMissing => {
            lines.push(Line::from(Span::styled(
                "✗ ffmpeg not found. Install ffmpeg and make sure it is in PATH.",
                Style::default().fg(Color::Red),
            )));
        }
    }

    if let Some(notice) = &state.notice {
        lines.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Status")),
        area,
    );
}

fn render_key_bar(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " Tab/↑↓ move · ←/→ adjust · Enter start · q quit",
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}
