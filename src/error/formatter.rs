use std::error::Error;
use std::io::IsTerminal;

use owo_colors::OwoColorize;

use super::CatalogError;

/// Formats CatalogError for CLI output
pub struct ErrorFormatter {
    verbose: bool,
    use_color: bool,
}

impl ErrorFormatter {
    /// Creates a new ErrorFormatter with default TTY detection
    pub fn new(verbose: bool) -> Self {
        Self::with_color_detection(verbose, Self::default_should_use_color)
    }

    /// Creates a new ErrorFormatter with injectable TTY detection for testing
    pub fn with_color_detection(verbose: bool, detect_color: fn() -> bool) -> Self {
        let use_color = detect_color();
        Self { verbose, use_color }
    }

    fn default_should_use_color() -> bool {
        std::io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err()
    }

    /// Formats the error for display
    pub fn format(&self, error: &CatalogError) -> String {
        let plain = if self.verbose {
            self.format_verbose_plain(error)
        } else {
            self.format_simple_plain(error)
        };

        // 色付け前にマスクする
        let masked = Self::mask_session_token(&plain);

        if self.use_color {
            Self::apply_color(&masked)
        } else {
            masked
        }
    }

    fn format_simple_plain(&self, error: &CatalogError) -> String {
        format!("error[{}]: {}", error.code().as_str(), error)
    }

    fn format_verbose_plain(&self, error: &CatalogError) -> String {
        let code = error.code();
        let mut output = self.format_simple_plain(error);

        output.push_str("\n  |");
        output.push_str(&format!("\n  | Cause: {}", code.cause()));

        output.push_str("\n  |");
        output.push_str("\n  | Remediation:");
        for line in code.remediation().lines() {
            output.push_str(&format!("\n  |   {}", line));
        }

        let mut current = error.source();
        if current.is_some() {
            output.push_str("\n  |");
            output.push_str("\n  | Source chain:");
        }
        while let Some(err) = current {
            output.push_str(&format!("\n  |   - {}", err));
            current = err.source();
        }

        output.push_str("\n  |");
        output.push_str("\n  = note: use `storefront --help` for more information");

        output
    }

    /// `token=` に続く値を伏せる
    fn mask_session_token(text: &str) -> String {
        const PATTERN: &str = "token=";
        let mut result = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(pos) = rest.find(PATTERN) {
            result.push_str(&rest[..pos]);
            result.push_str("token=***");
            let after = &rest[pos + PATTERN.len()..];
            let end = after
                .find(|c: char| c.is_whitespace() || c == '&' || c == ';' || c == '"' || c == '\'')
                .unwrap_or(after.len());
            rest = &after[end..];
        }
        result.push_str(rest);

        result
    }

    fn apply_color(text: &str) -> String {
        let mut result = String::new();

        for line in text.lines() {
            if !result.is_empty() {
                result.push('\n');
            }

            if line.starts_with("error[") {
                let bracket_end = line.find(']').map(|i| i + 1).unwrap_or(0);
                let (prefix, rest) = line.split_at(bracket_end);
                result.push_str(&format!("{}{}", prefix.red().bold(), rest.bold()));
            } else if line.starts_with("  | Cause:") {
                result.push_str(&line.yellow().to_string());
            } else if line.starts_with("  | Remediation:") {
                result.push_str(&line.green().to_string());
            } else if line.starts_with("  = note:") || line.starts_with("  |   -") {
                result.push_str(&line.dimmed().to_string());
            } else {
                result.push_str(line);
            }
        }

        result
    }
}
