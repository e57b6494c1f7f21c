use owo_colors::Style;

pub const ERROR_COLOR: Style = Style::new().red().bold();
pub const FOUND_COLOR: Style = Style::new().green();
pub const MISSING_COLOR: Style = Style::new().yellow();
pub const TOTAL_COLOR: Style = Style::new().bold();
