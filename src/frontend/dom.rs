use anyhow::{anyhow, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollToOptions, Window,
};

use crate::config::FALLBACK_VIEWPORT;
use crate::effects::scroll::ScrollMetrics;

pub fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{value:?}")
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow!("no window"))
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or_else(|| anyhow!("no document"))
}

fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn system_prefers_dark() -> bool {
    media_matches("(prefers-color-scheme: dark)")
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

pub fn viewport_size() -> (f64, f64) {
    let Ok(win) = window() else {
        return FALLBACK_VIEWPORT;
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.1);

    (width, height)
}

pub fn scroll_metrics() -> Result<ScrollMetrics> {
    let win = window()?;
    let root = document()?
        .document_element()
        .ok_or_else(|| anyhow!("no document element"))?;

    Ok(ScrollMetrics {
        scroll_top: win.scroll_y().map_err(js_error)?,
        scroll_height: f64::from(root.scroll_height()),
        client_height: f64::from(root.client_height()),
    })
}

pub fn scroll_to_top() -> Result<()> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Smooth-scrolls to the element with `id`.
pub fn scroll_to_section(id: &str) -> Result<()> {
    let target = document()?
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Opens `url` in a new browsing context. A popup blocker shows up as
/// `Ok(None)` from `window.open`, which is reported as an error here.
pub fn open_in_new_tab(url: &str) -> Result<()> {
    window()?
        .open_with_url_and_target(url, "_blank")
        .map_err(js_error)?
        .ok_or_else(|| anyhow!("popup blocked"))?;
    Ok(())
}

pub fn query_all(selector: &str) -> Result<Vec<Element>> {
    let nodes = document()?.query_selector_all(selector).map_err(js_error)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn canvas_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(js_error)?
        .ok_or_else(|| anyhow!("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| anyhow!("2d context has an unexpected type"))
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
