// ============================================================================
// ALERT BANNER - Aviso transitorio al golpear un límite de la ventana
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};

pub fn render(message: &str) -> Result<Element, JsValue> {
    let banner = ElementBuilder::new("div")?.class("alert-message").build();
    let text = ElementBuilder::new("p")?.text(message).build();
    append_child(&banner, &text)?;
    Ok(banner)
}
