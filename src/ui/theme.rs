//! Light and dark palettes. The active one is a pure function of the
//! dark-mode flag.

use ansi_term::{Colour, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    fn colour(self) -> Colour {
        Colour::RGB(self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub mode: ThemeMode,
    pub background: Rgb,
    pub primary: Rgb,
    pub on_background: Rgb,
    pub on_surface_variant: Rgb,
}

const LIGHT: Palette = Palette {
    mode: ThemeMode::Light,
    background: Rgb(0xFF, 0xFB, 0xFE),
    primary: Rgb(0x67, 0x50, 0xA4),
    on_background: Rgb(0x1C, 0x1B, 0x1F),
    on_surface_variant: Rgb(0x49, 0x45, 0x4F),
};

const DARK: Palette = Palette {
    mode: ThemeMode::Dark,
    background: Rgb(0x1C, 0x1B, 0x1F),
    primary: Rgb(0xD0, 0xBC, 0xFF),
    on_background: Rgb(0xE6, 0xE1, 0xE5),
    on_surface_variant: Rgb(0xCA, 0xC4, 0xD0),
};

impl Palette {
    pub fn for_dark_mode(dark_mode: bool) -> Self {
        match ThemeMode::from_dark_mode(dark_mode) {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
        }
    }

    pub fn title(&self) -> Style {
        self.primary.colour().on(self.background.colour()).bold()
    }

    pub fn text(&self) -> Style {
        self.on_background.colour().normal()
    }

    pub fn muted(&self) -> Style {
        self.on_surface_variant.colour().normal()
    }

    /// Paint `s` with `style`, or leave it untouched when colors are off.
    pub fn paint(&self, style: Style, s: &str, colored: bool) -> String {
        if colored {
            style.paint(s).to_string()
        } else {
            s.to_string()
        }
    }
}
