pub const ICON_CLOSED: &str = "fas fa-bars";
pub const ICON_OPEN: &str = "fas fa-times";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    pub fn icon(self) -> &'static str {
        if self.open {
            ICON_OPEN
        } else {
            ICON_CLOSED
        }
    }

    /// State after a document click; clicks on the drawer or its toggle are
    /// ignored.
    pub fn after_document_click(self, inside_nav: bool) -> Self {
        if self.open && !inside_nav {
            Self::closed()
        } else {
            self
        }
    }
}

/// Keys that activate the menu toggle from the keyboard.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrors_follow_open_state() {
        let closed = NavState::default();
        assert_eq!(closed.aria_expanded(), "false");
        assert_eq!(closed.icon(), ICON_CLOSED);

        let open = closed.toggled();
        assert!(open.is_open());
        assert_eq!(open.aria_expanded(), "true");
        assert_eq!(open.icon(), ICON_OPEN);
    }

    #[test]
    fn outside_click_closes_only_an_open_drawer() {
        let open = NavState::default().toggled();

        assert!(open.after_document_click(true).is_open());
        assert!(!open.after_document_click(false).is_open());
        assert_eq!(
            NavState::closed().after_document_click(false),
            NavState::closed()
        );
    }

    #[test]
    fn enter_and_space_activate() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Escape"));
    }
}
