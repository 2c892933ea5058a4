// ============================================================================
// VIEWS - Funciones que renderizan DOM (sin lógica de negocio)
// ============================================================================

pub mod alert_banner;
pub mod day_card;
pub mod error_view;
pub mod install_banner;
pub mod nav_bar;

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, TouchEvent};

use crate::config::CONFIG;
use crate::dom::{append_child, on_touch_end, on_touch_start, ElementBuilder};
use crate::state::app_state::AppState;
use crate::state::NavDirection;
use crate::viewmodels::PlannerViewModel;

/// Renderizar la aplicación completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let root = ElementBuilder::new("div")?.class("meal-planner").build();

    // Slot del banner de instalación
    let install_slot = ElementBuilder::new("div")?.id("install-slot")?.build();
    if state.install.borrow().is_offered() {
        append_child(&install_slot, &install_banner::render(state)?)?;
    }
    append_child(&root, &install_slot)?;

    // Contenedor del día con gestos de swipe
    let container = ElementBuilder::new("div")?
        .class("planner-container")
        .id("planner-container")?
        .build();
    append_child(&container, &render_planner_content(state)?)?;
    attach_swipe(&container, state)?;
    append_child(&root, &container)?;

    // Slot del aviso de límite
    let alert_slot = ElementBuilder::new("div")?.id("alert-slot")?.build();
    if let Some(message) = state.alert_message.borrow().as_deref() {
        append_child(&alert_slot, &alert_banner::render(message)?)?;
    }
    append_child(&root, &alert_slot)?;

    // Botones de navegación
    append_child(&root, &nav_bar::render(state)?)?;

    // Crédito
    let credit = ElementBuilder::new("div")?
        .class("developer-credit")
        .text("kykyemek · menú diario")
        .build();
    append_child(&root, &credit)?;

    Ok(root)
}

/// Contenido del contenedor del día: tarjeta, estado de carga o error-fallback
pub fn render_planner_content(state: &AppState) -> Result<Element, JsValue> {
    if let Some(day) = state.current_day() {
        day_card::render(&day, &state.animation_class.borrow())
    } else if *state.loading.borrow() {
        error_view::render_loading()
    } else {
        error_view::render()
    }
}

/// Swipe izquierda/derecha sobre el contenedor → siguiente/anterior
fn attach_swipe(container: &Element, state: &AppState) -> Result<(), JsValue> {
    let start_x: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    {
        let start_x = start_x.clone();
        on_touch_start(container, move |event: TouchEvent| {
            if let Some(touch) = event.touches().get(0) {
                start_x.set(Some(touch.client_x()));
            }
        })?;
    }

    let state = state.clone();
    on_touch_end(container, move |event: TouchEvent| {
        let begin = match start_x.take() {
            Some(x) => x,
            None => return,
        };
        let touch = match event.changed_touches().get(0) {
            Some(t) => t,
            None => return,
        };

        let delta = touch.client_x() - begin;
        let threshold = CONFIG.ui_config.swipe_threshold_px;
        let vm = PlannerViewModel::new(state.clone());
        if delta <= -threshold {
            vm.handle_navigation(NavDirection::Next);
        } else if delta >= threshold {
            vm.handle_navigation(NavDirection::Prev);
        }
    })?;

    Ok(())
}
