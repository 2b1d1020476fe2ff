use colored::{ColoredString, Colorize};

/// Predefined styles for terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Green,
    Yellow,
    Cyan,
    Dimmed,
}

/// Extension trait for applying consistent styles to text
pub trait StyledText {
    fn with_style(self, style: Style) -> ColoredString;
}

impl<T: AsRef<str>> StyledText for T {
    fn with_style(self, style: Style) -> ColoredString {
        let text = self.as_ref();
        match style {
            Style::Green => text.green(),
            Style::Yellow => text.yellow(),
            Style::Cyan => text.cyan(),
            Style::Dimmed => text.dimmed(),
        }
    }
}

/// Common status icons
pub mod icons {
    use colored::Colorize;

    pub fn success() -> String {
        "✓".green().to_string()
    }

    pub fn warning() -> String {
        "!".yellow().to_string()
    }

    pub fn bullet() -> &'static str {
        "•"
    }
}

/// Parses an `x,y` cell coordinate.
pub fn parse_point(s: &str) -> Result<voltlab_engine::GridPoint, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{s}'"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x in '{s}': {e}"))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad y in '{s}': {e}"))?;
    Ok(voltlab_engine::GridPoint::new(x, y))
}
