//! ANSI color helper utilities for terminal output.

use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Bar palette: lightblue, lightgreen, lightcoral, lightsalmon, lightseagreen,
/// plum, gold (xterm-256 approximations).
pub const BAR_PALETTE: [Colour; 7] = [
    Colour::Fixed(153),
    Colour::Fixed(120),
    Colour::Fixed(210),
    Colour::Fixed(216),
    Colour::Fixed(37),
    Colour::Fixed(183),
    Colour::Fixed(220),
];

/// Palette color for the bar at `index`, cycling when there are more bars
/// than colors.
pub fn bar_colour(index: usize) -> Colour {
    BAR_PALETTE[index % BAR_PALETTE.len()]
}

/// Pay color:
/// \>0 → green
/// 0 → grey
pub fn color_for_pay(value: f64) -> &'static str {
    if value > 0.0 { GREEN } else { GREY }
}
