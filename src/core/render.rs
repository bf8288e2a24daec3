//! Small text helpers shared by the summary and the console screens.

/// Width of the `=` and `-` rules around summaries and lists.
pub const RULE_WIDTH: usize = 50;
/// Width of the `=` rules around the welcome banner.
pub const WELCOME_WIDTH: usize = 55;
/// Width of the dotted rules around the menu title.
pub const MENU_DOTS_WIDTH: usize = 61;
/// Width of the closing rule under the main menu.
pub const MENU_WIDTH: usize = 60;
/// Width of the dotted rules around the profile creation header.
pub const HEADER_DOTS_WIDTH: usize = 54;

/// Formats a decimal the way people write measurements: whole values keep
/// one decimal place ("70.0"), everything else prints in shortest form.
pub fn decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Rounds to `places` decimals on the exact binary value, ties to even.
/// 78.125 is stored exactly and rounds down to 78.12.
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.places$}").parse().unwrap_or(value)
}
