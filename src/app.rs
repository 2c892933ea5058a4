// ============================================================================
// APP - Aplicación principal
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::incremental::{
    update_alert_banner, update_day_card, update_install_banner, update_nav_buttons,
};
use crate::dom::{append_child, get_element_by_id, set_document_attribute, set_inner_html};
use crate::state::app_state::{AppState, IncrementalUpdate};
use crate::utils::constants::THEME_KEY;
use crate::utils::storage;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Option<Element>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Aplicar y persistir el tema (oscuro por defecto)
        let theme = state.theme.borrow().clone();
        set_document_attribute("data-theme", &theme)?;
        if let Err(e) = storage::set_string(THEME_KEY, &theme) {
            log::warn!("⚠️ No se pudo persistir el tema: {}", e);
        }

        // Suscribirse a cambios de estado para re-renderizar automáticamente.
        // Timeout(0) batchea múltiples updates del mismo tick.
        state.subscribe_to_changes(move || {
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self {
            state,
            root: Some(root),
        })
    }

    /// Renderizar aplicación completa
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(root) = &self.root {
            set_inner_html(root, "");
            let app_view = render_app(&self.state)?;
            append_child(root, &app_view)?;
        }
        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        match update_type {
            IncrementalUpdate::DayCard => update_day_card(&self.state),
            IncrementalUpdate::AlertBanner => update_alert_banner(&self.state),
            IncrementalUpdate::NavButtons => update_nav_buttons(&self.state),
            IncrementalUpdate::InstallBanner => update_install_banner(&self.state),
        }
    }
}
