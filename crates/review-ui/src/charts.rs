//! Terminal chart rendering for the visualize menu.
//!
//! Charts are built as plain [`Line`]s (a horizontal bar per label for the
//! value charts, and a proportional segment bar plus percentage rows for the
//! review-share chart), then shown full-screen in the alternate screen until
//! the user dismisses them. The engine supplies only `(label, value)` pairs;
//! everything visual happens here.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use unicode_width::UnicodeWidthStr;

use review_core::formatting::{format_average, format_count, percentage};

use crate::themes::Theme;

/// Widest label column a chart will allocate before truncating.
const MAX_LABEL_WIDTH: usize = 28;

/// Name of a calendar month, 1-based. Out-of-range input answers `"Unknown"`.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| chrono::Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

// ── HorizontalBarChart ────────────────────────────────────────────────────────

/// A bar per `(label, value)` pair, scaled against a fixed maximum so rating
/// charts always read on the same 0–5 axis.
pub struct HorizontalBarChart<'a> {
    bars: Vec<(String, f64)>,
    max_value: f64,
    theme: &'a Theme,
    /// Width in terminal columns of the bar portion.
    pub width: u16,
}

impl<'a> HorizontalBarChart<'a> {
    /// Construct a chart over `bars` with the given axis maximum.
    pub fn new(bars: Vec<(String, f64)>, max_value: f64, theme: &'a Theme) -> Self {
        Self {
            bars,
            max_value,
            theme,
            width: 40,
        }
    }

    /// Render one [`Line`] per bar: padded label, filled/empty bar, value.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        let label_width = self
            .bars
            .iter()
            .map(|(label, _)| fit_label(label, MAX_LABEL_WIDTH).width())
            .max()
            .unwrap_or(0);

        self.bars
            .iter()
            .map(|(label, value)| {
                let fitted = fit_label(label, MAX_LABEL_WIDTH);
                let padding = " ".repeat(label_width.saturating_sub(fitted.width()));

                let ratio = if self.max_value > 0.0 {
                    (value / self.max_value).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let filled = (ratio * self.width as f64).round() as u16;
                let empty = self.width.saturating_sub(filled);

                Line::from(vec![
                    Span::styled(format!("{fitted}{padding} "), self.theme.label),
                    Span::styled("█".repeat(filled as usize), self.theme.bar_fill),
                    Span::styled("░".repeat(empty as usize), self.theme.bar_empty),
                    Span::styled(format!(" {}", format_average(*value)), self.theme.value),
                ])
            })
            .collect()
    }
}

// ── ShareChart ────────────────────────────────────────────────────────────────

/// Proportional share of a total per label, the terminal counterpart of a
/// pie chart. One multi-coloured segment bar on top, then a row per label
/// with its count and percentage.
pub struct ShareChart<'a> {
    slices: Vec<(String, u64)>,
    theme: &'a Theme,
    /// Width in terminal columns of the segment bar.
    pub width: u16,
}

impl<'a> ShareChart<'a> {
    /// Construct a share chart over `(label, count)` slices.
    pub fn new(slices: Vec<(String, u64)>, theme: &'a Theme) -> Self {
        Self {
            slices,
            theme,
            width: 50,
        }
    }

    /// Render the segment bar followed by one row per slice.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        let total: u64 = self.slices.iter().map(|(_, count)| count).sum();

        let mut segments: Vec<Span<'static>> = Vec::new();
        for (i, (_, count)) in self.slices.iter().enumerate() {
            let share = if total > 0 {
                *count as f64 / total as f64
            } else {
                0.0
            };
            let chars = (share * self.width as f64).round() as usize;
            if chars > 0 {
                segments.push(Span::styled("█".repeat(chars), self.theme.series_style(i)));
            }
        }

        let label_width = self
            .slices
            .iter()
            .map(|(label, _)| fit_label(label, MAX_LABEL_WIDTH).width())
            .max()
            .unwrap_or(0);

        let mut lines = vec![Line::from(segments), Line::from("")];
        for (i, (label, count)) in self.slices.iter().enumerate() {
            let fitted = fit_label(label, MAX_LABEL_WIDTH);
            let padding = " ".repeat(label_width.saturating_sub(fitted.width()));
            let pct = percentage(*count as f64, total as f64, 1);
            lines.push(Line::from(vec![
                Span::styled("■ ", self.theme.series_style(i)),
                Span::styled(format!("{fitted}{padding} "), self.theme.label),
                Span::styled(
                    format!("{} reviews ({pct:.1}%)", format_count(*count)),
                    self.theme.value,
                ),
            ]));
        }
        lines
    }
}

// ── Chart screen ──────────────────────────────────────────────────────────────

/// Render a titled chart screen into `area`.
pub fn render_chart_screen(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: &[Line<'static>],
    theme: &Theme,
) {
    let mut text: Vec<Line> = Vec::with_capacity(lines.len() + 3);
    text.push(Line::from(""));
    text.extend(lines.iter().cloned());
    text.push(Line::from(""));
    text.push(Line::styled(
        "Press 'q' to return to the menu",
        theme.dim,
    ));

    let paragraph = Paragraph::new(Text::from(text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title))
                .title_style(theme.header),
        )
        .style(theme.text);

    frame.render_widget(paragraph, area);
}

/// Show a chart full-screen until the user presses `q`, `Esc`, or `Ctrl+C`.
///
/// Enters the alternate screen for the duration and restores the terminal
/// unconditionally before returning, so the menu loop resumes cleanly.
pub fn show_chart(title: &str, lines: Vec<Line<'static>>, theme: &Theme) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(250);

    let result = loop {
        let draw = terminal.draw(|frame| {
            let area = frame.area();
            render_chart_screen(frame, area, title, &lines, theme);
        });
        if let Err(e) = draw {
            break Err(e);
        }

        match event::poll(tick_rate) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        break Ok(());
                    }
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break Ok(()),
                    _ => {}
                },
                Ok(_) => {}
                Err(e) => break Err(e),
            },
            Ok(false) => {}
            Err(e) => break Err(e),
        }
    };

    // Restore terminal state unconditionally.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Truncate `label` to at most `max` display columns, appending `…` when
/// anything was cut.
fn fit_label(label: &str, max: usize) -> String {
    if label.width() <= max {
        return label.to_string();
    }
    let mut fitted = String::new();
    for c in label.chars() {
        if fitted.width() + 1 >= max {
            break;
        }
        fitted.push(c);
    }
    fitted.push('…');
    fitted
}

// ── Tests ─────────────────────────────────────────────────────────────────────
