//! Route matching and collapse state for the application navbar.
//!
//! Everything here is pure so the navbar component stays a thin projection:
//! - `RouteDescriptor::is_active` decides path-based highlighting.
//! - `RouteDescriptor::is_promoted` covers the single promoted entry point.
//! - `MenuState` is the mobile menu's two-state machine.
//! - `NotificationBadge` decides what the bell badge shows.

/// Viewport width (logical px) at and above which the desktop layout applies.
pub const DESKTOP_BREAKPOINT_PX: f64 = 960.0;

/// Keyword that marks a route as eligible for forced highlighting.
const PROMOTED_KEYWORD: &str = "workforce management";

/// One navigation entry supplied by the platform shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Display label; also matched against the promotion keyword.
    pub name: String,
    /// URL path, unique within a route list.
    pub path: String,
    /// Promotion hint, only honoured for the workforce management entry.
    pub highlight: bool,
}

impl RouteDescriptor {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            highlight: false,
        }
    }

    pub fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }

    /// Exact match, or a continuation of any non-root path. The root route
    /// only matches exactly so it cannot swallow every other entry.
    pub fn is_active(&self, current_path: &str) -> bool {
        current_path == self.path || (self.path != "/" && current_path.starts_with(&self.path))
    }

    pub fn is_promoted(&self) -> bool {
        self.highlight && self.name.to_lowercase().contains(PROMOTED_KEYWORD)
    }

    pub fn is_highlighted(&self, current_path: &str) -> bool {
        self.is_active(current_path) || self.is_promoted()
    }
}

/// Collapse state of the mobile menu. Starts collapsed on every mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Collapsed,
    Expanded,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Expanded)
    }

    /// Menu button activation.
    pub fn toggle(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    /// Widening past the desktop breakpoint dismisses the menu; anything
    /// narrower leaves it untouched.
    pub fn on_viewport_resize(self, width: f64) -> Self {
        if width >= DESKTOP_BREAKPOINT_PX {
            Self::Collapsed
        } else {
            self
        }
    }
}

/// What the notification bell badge renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationBadge {
    count: u32,
}

impl NotificationBadge {
    pub fn new(count: u32) -> Self {
        Self { count }
    }

    /// A zero count keeps the badge in the tree but hides it, so the bell
    /// does not shift when notifications arrive.
    pub fn is_visible(&self) -> bool {
        self.count > 0
    }

    pub fn content(&self) -> Option<String> {
        self.is_visible().then(|| self.count.to_string())
    }

    pub fn css_class(&self) -> &'static str {
        if self.is_visible() {
            "navbar__badge"
        } else {
            "navbar__badge navbar__badge--invisible"
        }
    }
}

/// Avatar letter for a user name; blank when the name is blank.
pub fn avatar_initial(user_name: &str) -> String {
    user_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
