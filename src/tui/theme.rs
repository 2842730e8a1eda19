use ratatui::style::Color;

/// Colors for one theme. Stored as RGB so sections can be faded.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: (u8, u8, u8),
    pub text: (u8, u8, u8),
    pub dim: (u8, u8, u8),
    pub accent: (u8, u8, u8),    // highlights and active dot
    pub secondary: (u8, u8, u8), // banners and captions
}

pub const DARK: Palette = Palette {
    background: (26, 26, 46),  // #1A1A2E
    text: (240, 240, 240),     // #F0F0F0
    dim: (136, 136, 136),      // #888888
    accent: (255, 215, 0),     // #FFD700
    secondary: (124, 175, 194), // #7CAFC2
};

pub const LIGHT: Palette = Palette {
    background: (250, 248, 240), // #FAF8F0
    text: (34, 34, 34),          // #222222
    dim: (120, 120, 120),        // #787878
    accent: (74, 124, 89),       // #4A7C59
    secondary: (219, 120, 80),   // #DB7850
};

pub fn palette(dark_mode: bool) -> &'static Palette {
    if dark_mode { &DARK } else { &LIGHT }
}

pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Mix `fg` over `bg`; `opacity` 0 gives `bg`, 1 gives `fg`.
pub fn fade(fg: (u8, u8, u8), bg: (u8, u8, u8), opacity: f64) -> Color {
    let t = if opacity.is_finite() { opacity.clamp(0.0, 1.0) } else { 0.0 };
    let mix = |f: u8, b: u8| (f64::from(b) + (f64::from(f) - f64::from(b)) * t).round() as u8;
    Color::Rgb(mix(fg.0, bg.0), mix(fg.1, bg.1), mix(fg.2, bg.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(fade((255, 255, 255), (0, 0, 0), 1.0), Color::Rgb(255, 255, 255));
        assert_eq!(fade((255, 255, 255), (0, 0, 0), 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(fade((200, 100, 0), (0, 100, 200), 0.5), Color::Rgb(100, 100, 100));
        assert_eq!(fade((255, 255, 255), (0, 0, 0), f64::NAN), Color::Rgb(0, 0, 0));
    }
}
