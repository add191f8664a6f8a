use ratatui::style::Color;

pub const PALETTE_LEN: usize = 8;

/// Ordered chart colors of a theme. Fixed length, so never empty.
pub type Palette = [Color; PALETTE_LEN];

const VALENTINE: Palette = [
    Color::Rgb(0xff, 0x2e, 0x63),
    Color::Rgb(0xff, 0x5a, 0x8a),
    Color::Rgb(0xff, 0x9d, 0xb8),
    Color::Rgb(0xff, 0xb3, 0xc6),
    Color::Rgb(0xc7, 0x4b, 0x7c),
    Color::Rgb(0xff, 0x6f, 0x91),
    Color::Rgb(0xb3, 0x1b, 0x3f),
    Color::Rgb(0x7a, 0x0f, 0x29),
];

const HALLOWEEN: Palette = [
    Color::Rgb(0xff, 0x7a, 0x00),
    Color::Rgb(0xf4, 0xc2, 0x7a),
    Color::Rgb(0x6a, 0x1b, 0x9a),
    Color::Rgb(0x4a, 0x14, 0x8c),
    Color::Rgb(0x8e, 0x24, 0xaa),
    Color::Rgb(0xc0, 0x43, 0x00),
    Color::Rgb(0xff, 0xd1, 0x66),
    Color::Rgb(0x2d, 0x1b, 0x46),
];

const BRASIL: Palette = [
    Color::Rgb(0x00, 0x9b, 0x3a),
    Color::Rgb(0xff, 0xdf, 0x00),
    Color::Rgb(0x00, 0x27, 0x76),
    Color::Rgb(0x00, 0xc8, 0x51),
    Color::Rgb(0xff, 0xd1, 0x66),
    Color::Rgb(0x00, 0x50, 0xa0),
    Color::Rgb(0x7a, 0xb8, 0x00),
    Color::Rgb(0x00, 0x33, 0x66),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Valentine,
    #[default]
    Halloween,
    Brasil,
}

/// Accent and surface colors that go with a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeStyle {
    /// Chart title and highlighted widgets.
    pub accent: Color,
    /// Legend labels and secondary text.
    pub subtext: Color,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub overlay: Color,
    pub error: Color,
}

impl Theme {
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Valentine => "theme-valentine",
            Self::Halloween => "theme-halloween",
            Self::Brasil => "theme-brasil",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Valentine => "Valentine",
            Self::Halloween => "Halloween",
            Self::Brasil => "Brasil",
        }
    }

    /// Accepts a class name (`theme-brasil`) or a bare name (`brasil`), any case.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        let name = lower.strip_prefix("theme-").unwrap_or(&lower);
        match name {
            "valentine" => Some(Self::Valentine),
            "halloween" => Some(Self::Halloween),
            "brasil" | "brazil" => Some(Self::Brasil),
            _ => None,
        }
    }

    pub fn all() -> &'static [Theme] {
        &[Self::Valentine, Self::Halloween, Self::Brasil]
    }

    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|t| *t == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn prev(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|t| *t == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Self::Valentine => &VALENTINE,
            Self::Halloween => &HALLOWEEN,
            Self::Brasil => &BRASIL,
        }
    }

    pub fn style(&self) -> ThemeStyle {
        match self {
            Self::Valentine => ThemeStyle {
                accent: Color::Rgb(0xff, 0x2e, 0x63),
                subtext: Color::Rgb(0xff, 0xb3, 0xc6),
                background: Color::Rgb(0x2b, 0x0a, 0x14),
                surface: Color::Rgb(0x3d, 0x12, 0x21),
                text: Color::Rgb(0xff, 0xe4, 0xec),
                overlay: Color::Rgb(0x7a, 0x0f, 0x29),
                error: Color::Rgb(0xff, 0xd1, 0x66),
            },
            Self::Halloween => ThemeStyle {
                accent: Color::Rgb(0xff, 0x7a, 0x00),
                subtext: Color::Rgb(0xf4, 0xc2, 0x7a),
                background: Color::Rgb(0x1a, 0x10, 0x26),
                surface: Color::Rgb(0x2d, 0x1b, 0x46),
                text: Color::Rgb(0xf3, 0xe9, 0xdc),
                overlay: Color::Rgb(0x4a, 0x14, 0x8c),
                error: Color::Rgb(0xff, 0x5a, 0x5a),
            },
            Self::Brasil => ThemeStyle {
                accent: Color::Rgb(0xff, 0xdf, 0x00),
                subtext: Color::Rgb(0xc8, 0xf0, 0xd4),
                background: Color::Rgb(0x00, 0x1f, 0x3f),
                surface: Color::Rgb(0x00, 0x33, 0x66),
                text: Color::Rgb(0xf5, 0xf5, 0xf5),
                overlay: Color::Rgb(0x00, 0x50, 0xa0),
                error: Color::Rgb(0xff, 0x6b, 0x6b),
            },
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
