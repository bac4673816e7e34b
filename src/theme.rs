use leptos::prelude::*;

/// Class applied to the document root while the dark palette is active.
pub const THEME_MARKER: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// The root marker for this theme, if any.
    pub fn marker(self) -> Option<&'static str> {
        if self.is_dark() {
            Some(THEME_MARKER)
        } else {
            None
        }
    }

    pub fn avatar_src(self) -> &'static str {
        match self {
            Theme::Dark => "/avatar-dark.png",
            Theme::Light => "/avatar-light.png",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Something that carries the theme marker, normally `<html>`.
pub trait RootMarker {
    fn set_marker(&self, name: &str, on: bool);
}

/// Writes the marker onto `document.documentElement`.
pub struct DocumentRoot;

impl RootMarker for DocumentRoot {
    fn set_marker(&self, name: &str, on: bool) {
        let Some(root) = document().document_element() else {
            log::warn!("no document element to mark with {name}");
            return;
        };
        if let Err(err) = root.class_list().toggle_with_force(name, on) {
            log::warn!("couldn't set root marker {name}={on}: {err:?}");
        }
    }
}

/// Holds the page-wide theme preference. Created once by the root component
/// and handed down through context.
#[derive(Debug, Clone, Copy)]
pub struct ThemeController {
    theme: RwSignal<Theme>,
}

impl ThemeController {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: RwSignal::new(initial),
        }
    }

    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn get_untracked(&self) -> Theme {
        self.theme.get_untracked()
    }

    pub fn toggle(&self) {
        self.theme.update(|t| *t = t.toggled());
        log::debug!("theme toggled to {}", self.theme.get_untracked().key());
    }

    /// Makes the marker on `target` match the current preference.
    pub fn apply(&self, target: &impl RootMarker) {
        target.set_marker(THEME_MARKER, self.get().is_dark());
    }
}

impl Default for ThemeController {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

/// Creates the controller, provides it as context and keeps the marker on
/// `target` in sync with it.
pub fn provide_theme_with(target: impl RootMarker + 'static) -> ThemeController {
    let controller = ThemeController::default();
    provide_context(controller);
    Effect::new(move |_| controller.apply(&target));
    controller
}

pub fn provide_theme() -> ThemeController {
    provide_theme_with(DocumentRoot)
}

pub fn use_theme() -> ThemeController {
    expect_context::<ThemeController>()
}
