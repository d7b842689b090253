//! Light/dark theme preference.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse a stored preference. Anything but `"light"` (including nothing
    /// stored) means the default dark theme.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn from_light_mode(is_light: bool) -> Self {
        if is_light {
            Self::Light
        } else {
            Self::Dark
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::wire_theme_toggle;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::Theme;
    use crate::constants::{LIGHT_MODE_CLASS, THEME_STORAGE_KEY};
    use crate::dom;
    use web_sys as web;

    fn local_storage() -> Option<web::Storage> {
        web::window().and_then(|w| w.local_storage().ok().flatten())
    }

    fn apply(body: &web::HtmlElement, theme: Theme) {
        let cl = body.class_list();
        _ = match theme {
            Theme::Light => cl.add_1(LIGHT_MODE_CLASS),
            Theme::Dark => cl.remove_1(LIGHT_MODE_CLASS),
        };
    }

    /// Restore the stored theme and flip/persist it on each toggle click.
    pub fn wire_theme_toggle(document: &web::Document, toggle_id: &str) {
        let Some(body) = document.body() else {
            log::warn!("[theme] no <body>; skipping");
            return;
        };
        let stored = local_storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
        apply(&body, Theme::from_stored(stored.as_deref()));

        dom::add_click_listener(document, toggle_id, move || {
            let next = Theme::from_light_mode(body.class_list().contains(LIGHT_MODE_CLASS)).toggled();
            apply(&body, next);
            match local_storage() {
                Some(storage) => {
                    if let Err(e) = storage.set_item(THEME_STORAGE_KEY, next.as_str()) {
                        log::warn!("[theme] could not persist preference: {:?}", e);
                    }
                }
                None => log::warn!("[theme] localStorage unavailable"),
            }
        });
    }
}
