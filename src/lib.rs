// ============================================================================
// MEAL PLANNER APP - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI
// - Services: SOLO comunicación I/O (menú publicado, contadores externos)
// - State: State Management con Rc<RefCell> + máquinas de estado puras
// - Models: Estructuras del documento JSON de menús
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::state::app_state::UpdateType;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging en consola
    console_error_panic_hook::set_once();

    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🍽️ Meal Planner App - Rust Puro + MVVM");

    // Crear y renderizar app
    let mut app = App::new()?;
    app.render()?;

    // Guardar app en variable global
    let state = app.state().clone();
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Carga inicial del menú (ancla la navegación al día de hoy)
    viewmodels::PlannerViewModel::new(state.clone()).load_menu();

    // Señal de instalación de la plataforma (listener global, solo una vez)
    viewmodels::InstallViewModel::new(state).setup_listener()?;

    // Contadores de visitas: best-effort, los fallos solo se loguean
    services::VisitTracker::new().track_mount();
    services::visit_tracker::register_unload_listener()?;

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Actualizar la app con tipo específico; si la actualización incremental
/// falla (el elemento objetivo no existe), se hace fallback a re-render completo
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| match update_type {
        UpdateType::Incremental(inc_type) => {
            let needs_full_render = {
                if let Some(ref app) = *app_cell.borrow() {
                    match app.update_incremental(inc_type) {
                        Ok(()) => false,
                        Err(e) => {
                            log::warn!(
                                "⚠️ Actualización incremental falló ({:?}), re-render completo",
                                e
                            );
                            true
                        }
                    }
                } else {
                    log::warn!("⚠️ App no está inicializada");
                    false
                }
            };

            if needs_full_render {
                if let Some(ref mut app) = *app_cell.borrow_mut() {
                    if let Err(e) = app.render() {
                        log::error!("❌ Error re-renderizando: {:?}", e);
                    }
                }
            }
        }
        UpdateType::FullRender => {
            if let Some(ref mut app) = *app_cell.borrow_mut() {
                if let Err(e) = app.render() {
                    log::error!("❌ Error re-renderizando: {:?}", e);
                }
            } else {
                log::warn!("⚠️ App no está inicializada");
            }
        }
    });
}

/// Re-render completo invocable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
