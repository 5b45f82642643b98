#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Returns `true` if the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn drawer_class(self) -> &'static str {
        if self.open {
            "mobile-drawer open"
        } else {
            "mobile-drawer"
        }
    }

    /// SVG path for the menu button: a cross while open, a hamburger otherwise.
    pub fn icon_path(self) -> &'static str {
        if self.open {
            "M6 18L18 6M6 6l12 12"
        } else {
            "M4 6h16M4 12h16M4 18h16"
        }
    }
}
