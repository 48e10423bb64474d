use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

use super::dom::{document, prefers_reduced_motion, system_prefers_dark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    pub fn from_system() -> Self {
        if system_prefers_dark() {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

pub fn apply_theme(theme: Theme) {
    let root = document().ok().and_then(|d| d.document_element());
    match root {
        Some(root) => {
            if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
                log::error!("failed to set data-theme: {err:?}");
            }
        }
        None => log::error!("no document element to theme"),
    }
}

/// Swaps the theme inside a view transition when the browser has one and
/// the user has not asked for reduced motion.
pub fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Ok(document) = document() else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let start_view_transition =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition")).ok();
    let Some(start_view_transition) = start_view_transition
        .as_ref()
        .and_then(|value| value.dyn_ref::<Function>())
    else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));
    if start_view_transition
        .call1(&document_js, &callback)
        .is_err()
    {
        apply_theme(theme);
    }
}
