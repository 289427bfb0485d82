#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Shown,
    #[default]
    Hidden,
}

impl Visibility {
    /// CSS `display` value for the element.
    pub fn display(self) -> &'static str {
        match self {
            Visibility::Shown => "block",
            Visibility::Hidden => "none",
        }
    }
}

/// Navigation panel plus the overlay dimming the page behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sidebar {
    pub panel: Visibility,
    pub overlay: Visibility,
}

impl Sidebar {
    /// Menu button: hides both when the panel is shown, shows both otherwise.
    pub fn open(&mut self) {
        let next = match self.panel {
            Visibility::Shown => Visibility::Hidden,
            Visibility::Hidden => Visibility::Shown,
        };
        self.panel = next;
        self.overlay = next;
    }

    /// Overlay click: drops the overlay but leaves the panel visible.
    pub fn close(&mut self) {
        self.panel = Visibility::Shown;
        self.overlay = Visibility::Hidden;
    }
}
