//! The light/dark theme flag and its two palettes.

use dioxus::prelude::*;

/// Colors consumed by every styled element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub bg_color: &'static str,
    pub text_color: &'static str,
    pub accent_color: &'static str,
}

const DARK: Palette = Palette {
    bg_color: "#2f3640",
    text_color: "#ffffff",
    accent_color: "#fbc531",
};

const LIGHT: Palette = Palette {
    bg_color: "whitesmoke",
    text_color: "#111111",
    accent_color: "#fbc531",
};

/// Which of the two palettes is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::EnumIs)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Dark => &DARK,
            ThemeMode::Light => &LIGHT,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Handle to the process-wide theme flag.
///
/// Only this type writes the flag; everything styled reads it during render
/// and re-renders when it flips.
#[derive(Clone, Copy)]
pub struct ThemeController {
    mode: Signal<ThemeMode>,
}

impl ThemeController {
    pub fn current(&self) -> ThemeMode {
        (self.mode)()
    }

    pub fn palette(&self) -> &'static Palette {
        self.current().palette()
    }

    pub fn toggle(&mut self) {
        let next = self.mode.peek().flipped();
        self.mode.set(next);
    }
}

/// Provides the theme signal at the app root. Call once.
pub fn provide_theme() -> ThemeController {
    let mode = use_context_provider(|| Signal::new(ThemeMode::default()));
    ThemeController { mode }
}

/// Reads the theme controller from context.
pub fn use_theme() -> ThemeController {
    let mode = use_context::<Signal<ThemeMode>>();
    ThemeController { mode }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipping_alternates_between_the_two_modes() {
        assert_eq!(ThemeMode::Dark.flipped(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.flipped().flipped(), ThemeMode::Dark);
    }

    #[test]
    fn palettes_differ_only_where_they_should() {
        let dark = ThemeMode::Dark.palette();
        let light = ThemeMode::Light.palette();
        assert_ne!(dark.bg_color, light.bg_color);
        assert_ne!(dark.text_color, light.text_color);
        assert_eq!(dark.accent_color, light.accent_color);
    }

    #[test]
    fn default_mode_is_dark() {
        assert!(ThemeMode::default().is_dark());
    }
}
