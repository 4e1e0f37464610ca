use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

// Palettes are kept as raw RGB triples so they can be compared in tests and
// converted to terminal colors in one place.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    pub fn palette(self) -> Palette {
        match self {
            ThemeName::Dark => DARK,
            ThemeName::Light => LIGHT,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Dark => ThemeName::Light,
            ThemeName::Light => ThemeName::Dark,
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ThemeName::Dark => "dark",
            ThemeName::Light => "light",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ThemeName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeName::Dark),
            "light" => Ok(ThemeName::Light),
            other => Err(ConfigError::Invalid(format!("unknown theme `{other}`"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub panel_bg: (u8, u8, u8),
    pub panel_fg: (u8, u8, u8),
    pub accent: (u8, u8, u8),
    pub dock_bg: (u8, u8, u8),
    pub desktop_bg: (u8, u8, u8),
}

pub const DARK: Palette = Palette {
    panel_bg: (0x21, 0x21, 0x21),
    panel_fg: (0xff, 0xff, 0xff),
    accent: (0x00, 0xaa, 0xff),
    dock_bg: (0x11, 0x11, 0x11),
    desktop_bg: (0x0b, 0x12, 0x20),
};

pub const LIGHT: Palette = Palette {
    panel_bg: (0xf7, 0xf7, 0xf7),
    panel_fg: (0x11, 0x11, 0x11),
    accent: (0x00, 0x77, 0xcc),
    dock_bg: (0xee, 0xee, 0xee),
    desktop_bg: (0xdf, 0xe9, 0xf3),
};

pub fn rgb_to_color(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

impl Palette {
    pub fn panel_bg(&self) -> Color {
        rgb_to_color(self.panel_bg)
    }

    pub fn panel_fg(&self) -> Color {
        rgb_to_color(self.panel_fg)
    }

    pub fn accent(&self) -> Color {
        rgb_to_color(self.accent)
    }

    pub fn dock_bg(&self) -> Color {
        rgb_to_color(self.dock_bg)
    }

    pub fn desktop_bg(&self) -> Color {
        rgb_to_color(self.desktop_bg)
    }

    // Window chrome borrows the panel colors; the focused header uses the accent.
    pub fn header_bg(&self, focused: bool) -> Color {
        if focused {
            self.accent()
        } else {
            self.panel_bg()
        }
    }

    pub fn header_fg(&self) -> Color {
        self.panel_fg()
    }

    pub fn border(&self, focused: bool) -> Color {
        if focused { self.accent() } else { self.dock_bg() }
    }
}
