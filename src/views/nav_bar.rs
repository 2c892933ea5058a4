// ============================================================================
// NAV BAR - Botones anterior/siguiente, deshabilitados en los bordes
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::app_state::AppState;
use crate::state::NavDirection;
use crate::viewmodels::PlannerViewModel;

pub fn render(state: &AppState) -> Result<Element, JsValue> {
    let bar = ElementBuilder::new("div")?.class("navigation-buttons").build();

    let len = state.plan.borrow().len();
    let nav = *state.nav.borrow();
    let (can_prev, can_next) = match nav {
        Some(nav) if len > 0 => (nav.can_go_prev(), nav.can_go_next(len)),
        _ => (false, false),
    };

    let prev = build_button("nav-prev", "‹ Anterior", can_prev)?;
    {
        let state = state.clone();
        on_click(&prev, move |_| {
            PlannerViewModel::new(state.clone()).handle_navigation(NavDirection::Prev);
        })?;
    }
    append_child(&bar, &prev)?;

    let next = build_button("nav-next", "Siguiente ›", can_next)?;
    {
        let state = state.clone();
        on_click(&next, move |_| {
            PlannerViewModel::new(state.clone()).handle_navigation(NavDirection::Next);
        })?;
    }
    append_child(&bar, &next)?;

    Ok(bar)
}

fn build_button(id: &str, label: &str, enabled: bool) -> Result<Element, JsValue> {
    let builder = ElementBuilder::new("button")?
        .class("nav-button")
        .id(id)?
        .text(label);
    if enabled {
        Ok(builder.build())
    } else {
        Ok(builder.attr("disabled", "")?.build())
    }
}
