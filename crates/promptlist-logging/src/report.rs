use colored::Colorize;
use std::io::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const DEFAULT_WIDTH: usize = 80;
const MIN_BODY_WIDTH: usize = 20;
const INDENT: &str = "  ";
const HEADER_LABEL: &str = " PROMPT ";

/// A prompt as shown on the console.
#[derive(Debug, Clone, Copy)]
pub struct PromptReport<'a> {
    pub name: &'a str,
    /// List file the prompt came from
    pub source: &'a str,
    pub positive: &'a str,
    pub negative: &'a str,
}

/// Prints prompts to stderr, wrapped to the terminal width with highlighted
/// section labels.
#[derive(Debug, Clone)]
pub struct ConsoleReporter {
    width: usize,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    /// Reporter sized to the current terminal.
    pub fn new() -> Self {
        Self {
            width: terminal_width(),
        }
    }

    pub fn with_width(width: usize) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn report(&self, report: &PromptReport<'_>) {
        let rendered = self.render(report);
        let _ = write!(std::io::stderr(), "{}", rendered);
    }

    /// Build the text `report` would print.
    ///
    /// The header and both prompt sections are wrapped to the reporter width.
    /// Wrapped text never gets narrower than 20 columns, so smaller widths
    /// overflow.
    pub fn render(&self, report: &PromptReport<'_>) -> String {
        let body_width = self
            .width
            .saturating_sub(INDENT.len())
            .max(MIN_BODY_WIDTH);
        let header_indent = " ".repeat(HEADER_LABEL.len() + 1);
        let header_width = self
            .width
            .saturating_sub(header_indent.len())
            .max(MIN_BODY_WIDTH);
        let mut out = String::new();

        out.push('\n');
        let header = format!("{} ({})", report.name, report.source);
        for (i, line) in wrap_text(&header, header_width).iter().enumerate() {
            if i == 0 {
                out.push_str(&format!(
                    "{} {}\n",
                    HEADER_LABEL.bold().black().on_bright_cyan(),
                    line.as_str().bold().bright_white()
                ));
            } else {
                out.push_str(&format!(
                    "{}{}\n",
                    header_indent,
                    line.as_str().bold().bright_white()
                ));
            }
        }

        out.push_str(&format!(
            "{}\n",
            " POSITIVE ".bold().black().on_bright_green()
        ));
        Self::push_section(&mut out, report.positive, body_width, |line| {
            line.bright_green().to_string()
        });

        out.push_str(&format!("{}\n", " NEGATIVE ".bold().white().on_red()));
        Self::push_section(&mut out, report.negative, body_width, |line| {
            line.bright_red().to_string()
        });

        out
    }

    fn push_section(out: &mut String, text: &str, width: usize, style: impl Fn(&str) -> String) {
        let lines = wrap_text(text, width);
        if lines.iter().all(|l| l.is_empty()) {
            out.push_str(&format!("{}{}\n", INDENT, "(empty)".dimmed()));
            return;
        }
        for line in lines {
            out.push_str(&format!("{}{}\n", INDENT, style(line.as_str())));
        }
    }
}

/// Current terminal width in columns, or 80 when it cannot be detected.
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .ok()
        .map(|(cols, _)| cols as usize)
        .filter(|cols| *cols > 0)
        .unwrap_or(DEFAULT_WIDTH)
}

/// Greedy word wrap by display width.
///
/// Explicit line breaks are kept. Words wider than `width` are split across
/// lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);

            if word_width > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                for ch in word.chars() {
                    let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                    if current_width + ch_width > width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += ch_width;
                }
                continue;
            }

            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
            }
        }

        lines.push(current);
    }

    lines
}
