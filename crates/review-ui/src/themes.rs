use ratatui::style::{Color, Modifier, Style};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned as the safe
/// default.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Theme definition carrying the UI styles used by the chart screens.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Text ─────────────────────────────────────────────────────────────────
    pub header: Style,
    pub text: Style,
    pub dim: Style,
    pub label: Style,
    pub value: Style,
    pub warning: Style,

    // ── Chart bars ───────────────────────────────────────────────────────────
    /// Filled portion of a horizontal value bar.
    pub bar_fill: Style,
    /// Unfilled portion of a horizontal value bar.
    pub bar_empty: Style,

    // ── Share chart ──────────────────────────────────────────────────────────
    /// Palette cycled through for the segments of the share chart.
    pub series: [Style; 6],
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            warning: Style::default().fg(Color::Yellow),

            bar_fill: Style::default().fg(Color::Cyan),
            bar_empty: Style::default().fg(Color::DarkGray),

            series: [
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Magenta),
                Style::default().fg(Color::Green),
                Style::default().fg(Color::Yellow),
                Style::default().fg(Color::Blue),
                Style::default().fg(Color::Red),
            ],
        }
    }

    /// Light-background terminal theme.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            warning: Style::default().fg(Color::Rgb(180, 120, 0)),

            bar_fill: Style::default().fg(Color::Blue),
            bar_empty: Style::default().fg(Color::Gray),

            series: [
                Style::default().fg(Color::Blue),
                Style::default().fg(Color::Magenta),
                Style::default().fg(Color::Rgb(0, 120, 0)),
                Style::default().fg(Color::Rgb(180, 120, 0)),
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Red),
            ],
        }
    }

    /// Resolve a theme name from the CLI: `"light"`, `"dark"`, or `"auto"`
    /// (background detection). Unknown names fall back to dark.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            _ => match detect_background() {
                BackgroundType::Light => Self::light(),
                _ => Self::dark(),
            },
        }
    }

    /// Style for the `index`-th series of a share chart, cycling the palette.
    pub fn series_style(&self, index: usize) -> Style {
        self.series[index % self.series.len()]
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_light() {
        let theme = Theme::from_name("light");
        assert_eq!(theme.text.fg, Some(Color::Black));
    }

    #[test]
    fn test_from_name_dark() {
        let theme = Theme::from_name("dark");
        assert_eq!(theme.text.fg, Some(Color::White));
    }

    #[test]
    fn test_series_style_cycles() {
        let theme = Theme::dark();
        assert_eq!(theme.series_style(0), theme.series_style(6));
        assert_eq!(theme.series_style(2), theme.series_style(8));
    }

    #[test]
    fn test_detect_background_from_colorfgbg() {
        let original = std::env::var_os("COLORFGBG");

        std::env::set_var("COLORFGBG", "15;0");
        assert_eq!(detect_background(), BackgroundType::Dark);

        std::env::set_var("COLORFGBG", "0;15");
        assert_eq!(detect_background(), BackgroundType::Light);

        match original {
            Some(v) => std::env::set_var("COLORFGBG", v),
            None => std::env::remove_var("COLORFGBG"),
        }
    }
}
