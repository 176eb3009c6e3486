use ratatui::style::Color;

/// The portfolio's single palette: white on black with one accent
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

    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg0: Color::Rgb(0x00, 0x00, 0x00),
            bg1: Color::Rgb(0x12, 0x12, 0x12),
            bg2: Color::Rgb(0x26, 0x26, 0x26),
            fg0: Color::Rgb(0xff, 0xff, 0xff),
            fg1: Color::Rgb(0xe5, 0xe5, 0xe5),
            grey0: Color::Rgb(0x6b, 0x6b, 0x6b),
            grey1: Color::Rgb(0x9c, 0x9c, 0x9c),
            accent: Color::Rgb(0xf5, 0x5a, 0x3c),
        }
    }
}

impl Theme {
    /// Blend `fg0` toward `bg0` by `opacity` in [0, 1]
    ///
    /// Terminals have no alpha channel, so scroll-linked fades are drawn as
    /// a mix of the two colors.
    pub fn faded(&self, opacity: f64) -> Color {
        mix(self.bg0, self.fg0, opacity)
    }
}

fn mix(from: Color, to: Color, amount: f64) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let channel = |a: u8, b: u8| {
                (f64::from(a) + (f64::from(b) - f64::from(a)) * amount).round() as u8
            };
            Color::Rgb(channel(r0, r1), channel(g0, g1), channel(b0, b1))
        }
        _ if amount < 0.5 => from,
        _ => to,
    }
}
