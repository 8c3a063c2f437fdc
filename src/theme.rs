pub const THEME_KEY: &str = "site-theme";
pub const LIGHT_THEME_CLASS: &str = "light-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    /// `aria-pressed` of the toggle: pressed means light.
    pub fn pressed(self) -> bool {
        matches!(self, Self::Light)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "fas fa-sun",
            Self::Dark => "fas fa-moon",
        }
    }

    /// Resolution order: stored value, system preference, dark.
    pub fn resolve(stored: Option<&str>, system_prefers_light: Option<bool>) -> Self {
        if let Some(theme) = stored.and_then(Self::from_str) {
            return theme;
        }

        match system_prefers_light {
            Some(true) => Self::Light,
            _ => Self::Dark,
        }
    }
}

/// Key-value storage holding the theme preference.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Where the applied theme becomes visible (root class, toggle affordance).
pub trait ThemeSurface {
    fn apply(&mut self, theme: Theme);
}

pub struct ThemeController<S, D> {
    theme: Theme,
    store: S,
    surface: D,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeController<S, D> {
    pub fn init(store: S, mut surface: D, system_prefers_light: Option<bool>) -> Self {
        let stored = store.get(THEME_KEY);
        let theme = Theme::resolve(stored.as_deref(), system_prefers_light);
        surface.apply(theme);

        Self {
            theme,
            store,
            surface,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.surface.apply(next);
        self.store.set(THEME_KEY, next.as_str());
        self.theme = next;
        next
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    fn surface(&self) -> &D {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(HashMap<String, String>);

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        root_has_light_class: bool,
        aria_pressed: bool,
        applied: usize,
    }

    impl ThemeSurface for RecordingSurface {
        fn apply(&mut self, theme: Theme) {
            self.root_has_light_class = theme == Theme::Light;
            self.aria_pressed = theme.pressed();
            self.applied += 1;
        }
    }

    #[test]
    fn stored_value_wins_over_system_preference() {
        assert_eq!(Theme::resolve(Some("dark"), Some(true)), Theme::Dark);
        assert_eq!(Theme::resolve(Some("light"), Some(false)), Theme::Light);
    }

    #[test]
    fn unknown_stored_value_falls_through() {
        assert_eq!(Theme::resolve(Some("sepia"), Some(true)), Theme::Light);
        assert_eq!(Theme::resolve(Some(""), None), Theme::Dark);
    }

    #[test]
    fn default_is_dark() {
        assert_eq!(Theme::resolve(None, None), Theme::Dark);
        assert_eq!(Theme::resolve(None, Some(false)), Theme::Dark);
    }

    #[test]
    fn init_applies_without_persisting() {
        let controller = ThemeController::init(
            MemoryStore::default(),
            RecordingSurface::default(),
            Some(true),
        );

        assert_eq!(controller.theme(), Theme::Light);
        assert!(controller.surface().root_has_light_class);
        assert!(controller.store().get(THEME_KEY).is_none());
    }

    #[test]
    fn toggle_twice_is_an_involution() {
        let mut store = MemoryStore::default();
        store.set(THEME_KEY, "light");
        let mut controller = ThemeController::init(store, RecordingSurface::default(), None);

        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.store().get(THEME_KEY).as_deref(), Some("dark"));
        assert!(!controller.surface().root_has_light_class);

        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(controller.store().get(THEME_KEY).as_deref(), Some("light"));
        assert!(controller.surface().root_has_light_class);
        assert!(controller.surface().aria_pressed);
        assert_eq!(controller.surface().applied, 3);
    }

    #[test]
    fn labels_name_the_next_theme() {
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert_eq!(Theme::Light.icon(), "fas fa-sun");
    }
}
