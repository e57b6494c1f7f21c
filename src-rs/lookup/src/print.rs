//! Terminal output for reports and errors

use anstream::{eprintln, println};
use owo_colors::Style;

use crate::{
    report::{Line, ReportError},
    stylesheet,
};

pub enum ColorChoice {
    EnableColors,
    DisableColors,
}

impl ColorChoice {
    pub const fn new(use_colors: bool) -> Self {
        if use_colors {
            Self::EnableColors
        } else {
            Self::DisableColors
        }
    }

    pub fn style(&self, style: Style, text: &str) -> String {
        match self {
            Self::EnableColors => style.style(text).to_string(),
            Self::DisableColors => text.to_string(),
        }
    }
}

/// Prints each report line to stdout
pub fn print_lines(lines: &[Line], color_choice: &ColorChoice) {
    for line in lines {
        let line_string = line_to_string(line, color_choice);
        println!("{line_string}");
    }
}

/// Prints an error to stderr
pub fn print_error(error: &ReportError, color_choice: &ColorChoice) {
    let error_string = error_to_string(error, color_choice);
    eprintln!("{error_string}");
}

fn line_to_string(line: &Line, color_choice: &ColorChoice) -> String {
    match line {
        Line::Value(value) => color_choice.style(stylesheet::FOUND_COLOR, &value.to_string()),
        Line::Undefined => color_choice.style(stylesheet::MISSING_COLOR, "undefined"),
        Line::Total(total) => color_choice.style(stylesheet::TOTAL_COLOR, &total.to_string()),
        Line::Matched { text, found: true } => color_choice.style(stylesheet::FOUND_COLOR, text),
        Line::Matched { text, found: false } => {
            color_choice.style(stylesheet::MISSING_COLOR, text)
        }
    }
}

fn error_to_string(error: &ReportError, color_choice: &ColorChoice) -> String {
    // error: <message>
    let kind_str = color_choice.style(stylesheet::ERROR_COLOR, "error");
    format!("{kind_str}: {error}")
}
