// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Para listeners en elementos del DOM: cuando el elemento se destruye (p.ej.
//   con set_inner_html("")), el navegador limpia automáticamente los listeners,
//   por lo que closure.forget() es seguro para listeners locales.
// - Para listeners globales (window): solo deben registrarse UNA VEZ al inicio
//   de la app, con un flag de protección (ver visit_tracker / install_viewmodel).
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, TouchEvent};

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    // closure.forget() es necesario para mantener el closure vivo en Rust WASM
    closure.forget();
    Ok(())
}

/// Touch start handler (gestos de swipe)
pub fn on_touch_start<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(TouchEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(TouchEvent)>);
    element.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Touch end handler (gestos de swipe)
pub fn on_touch_end<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(TouchEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(TouchEvent)>);
    element.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
