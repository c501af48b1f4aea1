use std::env;

use color_eyre::owo_colors::OwoColorize;

pub struct Style {
    enabled: bool,
}

impl Style {
    pub fn new(force_no_color: bool, is_tty: bool) -> Self {
        let env_no_color = env::var_os("NO_COLOR").is_some();
        Self {
            enabled: !(force_no_color || env_no_color) && is_tty,
        }
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(&format!("✔ {text}"), Tone::Success)
    }

    pub fn failure(&self, text: &str) -> String {
        self.paint(&format!("✖ {text}"), Tone::Failure)
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(&format!("! {text}"), Tone::Warning)
    }

    pub fn info(&self, text: &str) -> String {
        self.paint(text, Tone::Info)
    }

    pub fn detail(&self, text: &str) -> String {
        if !self.enabled {
            return format!("  {text}");
        }
        format!("  {}", text.dimmed())
    }

    pub fn hint(&self, hint: &str) -> String {
        if !self.enabled {
            return format!("Hint: {hint}");
        }
        let prefix = "Hint:".cyan().bold().to_string();
        format!("{prefix} {hint}")
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match tone {
            Tone::Success => text.green().bold().to_string(),
            Tone::Failure => text.red().bold().to_string(),
            Tone::Warning => text.yellow().to_string(),
            Tone::Info => text.cyan().to_string(),
        }
    }
}

#[derive(Clone, Copy)]
enum Tone {
    Success,
    Failure,
    Warning,
    Info,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_when_not_a_tty() {
        let style = Style::new(false, false);
        assert_eq!(style.success("done"), "✔ done");
        assert_eq!(style.hint("try again"), "Hint: try again");
        assert_eq!(style.detail("x"), "  x");
    }

    #[test]
    fn enabled_style_bolds_only_outcome_lines() {
        let style = Style { enabled: true };
        let success = style.success("done");
        assert!(success.contains("✔ done"));
        assert!(success.contains("\u{1b}[1m"), "{success:?}");
        let warning = style.warning("careful");
        assert!(warning.contains("! careful"));
        assert!(!warning.contains("\u{1b}[1m"), "{warning:?}");
    }
}
