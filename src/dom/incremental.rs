// ============================================================================
// INCREMENTAL UPDATES - Actualizaciones puntuales del DOM sin re-render total
// ============================================================================
// Cada función falla con Err si el elemento objetivo no existe todavía;
// el caller hace entonces fallback a re-render completo.
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{append_child, get_element_by_id, remove_attribute, set_attribute, set_inner_html};
use crate::state::app_state::AppState;
use crate::views;

/// Re-renderizar solo la tarjeta del día (contenido + clase de animación)
pub fn update_day_card(state: &AppState) -> Result<(), JsValue> {
    let container = get_element_by_id("planner-container")
        .ok_or_else(|| JsValue::from_str("planner-container not found, needs full render"))?;

    set_inner_html(&container, "");
    let content = views::render_planner_content(state)?;
    append_child(&container, &content)
}

/// Mostrar/ocultar el aviso de límite de navegación
pub fn update_alert_banner(state: &AppState) -> Result<(), JsValue> {
    let slot = get_element_by_id("alert-slot")
        .ok_or_else(|| JsValue::from_str("alert-slot not found, needs full render"))?;

    set_inner_html(&slot, "");
    if let Some(message) = state.alert_message.borrow().as_deref() {
        let banner = views::alert_banner::render(message)?;
        append_child(&slot, &banner)?;
    }
    Ok(())
}

/// Habilitar/deshabilitar los botones de navegación según la ventana
pub fn update_nav_buttons(state: &AppState) -> Result<(), JsValue> {
    let prev = get_element_by_id("nav-prev")
        .ok_or_else(|| JsValue::from_str("nav-prev not found, needs full render"))?;
    let next = get_element_by_id("nav-next")
        .ok_or_else(|| JsValue::from_str("nav-next not found, needs full render"))?;

    let len = state.plan.borrow().len();
    let nav = state.nav.borrow();
    let (can_prev, can_next) = match nav.as_ref() {
        Some(nav) if len > 0 => (nav.can_go_prev(), nav.can_go_next(len)),
        _ => (false, false),
    };

    toggle_disabled(&prev, !can_prev)?;
    toggle_disabled(&next, !can_next)
}

/// Mostrar/ocultar el banner de instalación
pub fn update_install_banner(state: &AppState) -> Result<(), JsValue> {
    let slot = get_element_by_id("install-slot")
        .ok_or_else(|| JsValue::from_str("install-slot not found, needs full render"))?;

    set_inner_html(&slot, "");
    if state.install.borrow().is_offered() {
        let banner = views::install_banner::render(state)?;
        append_child(&slot, &banner)?;
    }
    Ok(())
}

fn toggle_disabled(element: &web_sys::Element, disabled: bool) -> Result<(), JsValue> {
    if disabled {
        set_attribute(element, "disabled", "")
    } else {
        remove_attribute(element, "disabled")
    }
}
