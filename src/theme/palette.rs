use ratatui::style::Color;

use super::types::Theme;

/// Trend line color.
const CHART_LINE: Color = Color::Rgb(0x4C, 0xAF, 0x50);
/// Moving average and "rate decreased" accent.
const CHART_AVERAGE: Color = Color::Rgb(0xFF, 0x98, 0x00);
/// Bearish candle color.
const CHART_DECREASE: Color = Color::Rgb(0xF4, 0x43, 0x36);

/// Catppuccin Mocha.
const DARK: Theme = Theme {
    base: Color::Rgb(0x1e, 0x1e, 0x2e),
    mantle: Color::Rgb(0x18, 0x18, 0x25),
    surface1: Color::Rgb(0x45, 0x47, 0x5a),
    overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
    text: Color::Rgb(0xcd, 0xd6, 0xf4),
    subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
    sapphire: Color::Rgb(0x74, 0xc7, 0xec),
    mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
    green: Color::Rgb(0xa6, 0xe3, 0xa1),
    yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
    red: Color::Rgb(0xf3, 0x8b, 0xa8),
    chart_line: CHART_LINE,
    chart_average: CHART_AVERAGE,
    chart_decrease: CHART_DECREASE,
};

/// Catppuccin Latte.
const LIGHT: Theme = Theme {
    base: Color::Rgb(0xef, 0xf1, 0xf5),
    mantle: Color::Rgb(0xe6, 0xe9, 0xef),
    surface1: Color::Rgb(0xbc, 0xc0, 0xcc),
    overlay1: Color::Rgb(0x8c, 0x8f, 0xa1),
    text: Color::Rgb(0x4c, 0x4f, 0x69),
    subtext0: Color::Rgb(0x6c, 0x6f, 0x85),
    sapphire: Color::Rgb(0x20, 0x9f, 0xb5),
    mauve: Color::Rgb(0x88, 0x39, 0xef),
    green: Color::Rgb(0x40, 0xa0, 0x2b),
    yellow: Color::Rgb(0xdf, 0x8e, 0x1d),
    red: Color::Rgb(0xd2, 0x0f, 0x39),
    chart_line: CHART_LINE,
    chart_average: CHART_AVERAGE,
    chart_decrease: CHART_DECREASE,
};

/// Return the palette for the requested mode.
#[must_use]
pub const fn theme(dark: bool) -> Theme {
    if dark { DARK } else { LIGHT }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_but_share_chart_accents() {
        let (d, l) = (theme(true), theme(false));
        assert_ne!(d.base, l.base);
        assert_eq!(d.chart_line, l.chart_line);
        assert_eq!(d.chart_average, Color::Rgb(255, 152, 0));
    }
}
