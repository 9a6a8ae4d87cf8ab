/// Storage key holding the user's explicit theme choice.
pub const THEME_KEY: &str = "theme";

/// An explicit light/dark choice, as written to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Value stored under [`THEME_KEY`].
    pub fn as_sentinel(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Only the exact `"dark"` sentinel means dark; anything else stored is light.
    pub fn from_sentinel(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert_eq!(ThemePreference::Dark.as_sentinel(), "dark");
        assert_eq!(ThemePreference::Light.as_sentinel(), "light");
        assert_eq!(ThemePreference::from_sentinel("dark"), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_sentinel("light"), ThemePreference::Light);
    }

    #[test]
    fn test_unknown_sentinel_is_light() {
        assert_eq!(ThemePreference::from_sentinel("Dark"), ThemePreference::Light);
        assert_eq!(ThemePreference::from_sentinel(""), ThemePreference::Light);
    }

    #[test]
    fn test_from_dark() {
        assert!(ThemePreference::from_dark(true).is_dark());
        assert!(!ThemePreference::from_dark(false).is_dark());
    }
}
