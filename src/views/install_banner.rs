// ============================================================================
// INSTALL BANNER - Oferta de instalación en pantalla de inicio
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::app_state::AppState;
use crate::viewmodels::InstallViewModel;

pub fn render(state: &AppState) -> Result<Element, JsValue> {
    let banner = ElementBuilder::new("div")?.class("install-prompt").build();

    let close = ElementBuilder::new("button")?
        .class("close-prompt")
        .text("✕")
        .build();
    {
        let state = state.clone();
        on_click(&close, move |_| {
            InstallViewModel::new(state.clone()).dismiss();
        })?;
    }
    append_child(&banner, &close)?;

    let text = ElementBuilder::new("div")?
        .class("install-prompt-text")
        .text("Añade la aplicación a tu pantalla de inicio para un acceso más rápido")
        .build();
    append_child(&banner, &text)?;

    let install = ElementBuilder::new("button")?
        .class("install-button")
        .text("Añadir")
        .build();
    {
        let state = state.clone();
        on_click(&install, move |_| {
            InstallViewModel::new(state.clone()).accept();
        })?;
    }
    append_child(&banner, &install)?;

    Ok(banner)
}
