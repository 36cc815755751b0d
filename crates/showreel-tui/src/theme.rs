use ratatui::style::Color;

/// Runtime palette for the page
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Palette colors
    pub yellow: Color,
    pub aqua: Color,
    pub red: Color,

    // Semantic colors
    pub accent: Color,
    pub shadow: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Near-black page with warm highlights
        Self {
            bg0: Color::Rgb(0x00, 0x00, 0x00),
            bg1: Color::Rgb(0x12, 0x12, 0x12),
            bg2: Color::Rgb(0x26, 0x26, 0x26),
            fg0: Color::Rgb(0xf5, 0xf5, 0xf5),
            fg1: Color::Rgb(0xd4, 0xd4, 0xd4),
            grey0: Color::Rgb(0x73, 0x73, 0x73),
            grey1: Color::Rgb(0xa3, 0xa3, 0xa3),
            yellow: Color::Rgb(0xd8, 0xa6, 0x57),
            aqua: Color::Rgb(0x89, 0xb4, 0x82),
            red: Color::Rgb(0xea, 0x69, 0x62),
            accent: Color::Rgb(0xff, 0xff, 0xff),
            shadow: Color::Rgb(0x0a, 0x0a, 0x0a),
        }
    }
}

/// RGB components of a color; non-RGB colors map to black or white
pub fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::White => (0xff, 0xff, 0xff),
        Color::Gray => (0xc0, 0xc0, 0xc0),
        Color::DarkGray => (0x80, 0x80, 0x80),
        _ => (0, 0, 0),
    }
}

/// Mix `from` toward `to` by `amount` in [0, 1]
pub fn mix(from: Color, to: Color, amount: f64) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    let (r1, g1, b1) = rgb(from);
    let (r2, g2, b2) = rgb(to);
    let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * amount).round() as u8;
    Color::Rgb(channel(r1, r2), channel(g1, g2), channel(b1, b2))
}

/// Foreground `color` drawn at `opacity` over `background`
pub fn fade(color: Color, background: Color, opacity: f64) -> Color {
    mix(background, color, opacity)
}
