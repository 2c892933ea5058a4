// ============================================================================
// ERROR VIEW - Fallback cuando no hay día renderizable
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};

/// Mensaje estático cuando el plan está vacío (fallo de carga o sin datos)
pub fn render() -> Result<Element, JsValue> {
    let view = ElementBuilder::new("div")?.class("error-message").build();
    let text = ElementBuilder::new("p")?
        .text("No se pudo cargar el plan de comidas. Inténtalo de nuevo más tarde.")
        .build();
    append_child(&view, &text)?;
    Ok(view)
}

/// Placeholder mientras la carga inicial sigue en curso
pub fn render_loading() -> Result<Element, JsValue> {
    let view = ElementBuilder::new("div")?.class("loading-message").build();
    let text = ElementBuilder::new("p")?.text("Cargando el menú…").build();
    append_child(&view, &text)?;
    Ok(view)
}
