//! Light/dark theme value and the toggle control's presentation.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The two supported color themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted/displayed name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything but the two exact names is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Theme> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn opposite(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Toggle icon: the sun offers light mode, the moon offers dark mode.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "\u{2600}\u{FE0F}",
            Theme::Light => "\u{1F319}",
        }
    }

    /// Accessible label for the toggle control.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light theme",
            Theme::Light => "Switch to dark theme",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
