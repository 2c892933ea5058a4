// ============================================================================
// INSTALL VIEWMODEL - Flujo del prompt de instalación (PWA)
// ============================================================================
// La señal beforeinstallprompt es el único disparador externo de la máquina
// de estados. El handle diferido se conserva como JsValue opaco y solo se
// conduce vía prompt()/userChoice por reflexión.
// ============================================================================

use std::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Event;

use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::state::install_state::{is_mobile_user_agent, should_offer};
use crate::state::InstallPromptState;
use crate::utils::constants::INSTALL_DISMISSED_KEY;
use crate::utils::storage;

thread_local! {
    // Flag para prevenir múltiples registros del listener global
    static LISTENER_REGISTERED: Cell<bool> = Cell::new(false);
}

pub struct InstallViewModel {
    state: AppState,
}

impl InstallViewModel {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Registrar el listener de beforeinstallprompt (solo una vez por app)
    pub fn setup_listener(&self) -> Result<(), JsValue> {
        if *self.state.install.borrow() == InstallPromptState::Dismissed {
            log::info!("ℹ️ Prompt de instalación descartado en una sesión anterior");
            return Ok(());
        }

        let already = LISTENER_REGISTERED.with(|flag| flag.replace(true));
        if already {
            log::warn!("⚠️ InstallViewModel: listener ya registrado, ignorando");
            return Ok(());
        }

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;

        let state = self.state.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();

            // Conservar el handle diferido como capacidad opaca
            *state.deferred_prompt.borrow_mut() = Some(JsValue::from(event.clone()));

            let is_mobile = web_sys::window()
                .and_then(|w| w.navigator().user_agent().ok())
                .map(|ua| is_mobile_user_agent(&ua))
                .unwrap_or(false);
            let standalone = is_standalone_display_mode();

            let current = *state.install.borrow();
            if should_offer(current, is_mobile, standalone) {
                *state.install.borrow_mut() = current.offer();
                log::info!("📲 Instalación disponible, mostrando banner");
                crate::rerender_app_with_type(UpdateType::Incremental(
                    IncrementalUpdate::InstallBanner,
                ));
            }
        }) as Box<dyn FnMut(Event)>);

        window
            .add_event_listener_with_callback("beforeinstallprompt", closure.as_ref().unchecked_ref())?;
        // Listener global: vive toda la app, forget() es el comportamiento deseado
        closure.forget();

        log::info!("✅ InstallViewModel: listener registrado");
        Ok(())
    }

    /// El usuario pulsó "Instalar": lanzar el prompt de la plataforma y esperar
    /// su decisión. El flag de descarte se persiste en todos los caminos.
    pub fn accept(&self) {
        let state = self.state.clone();
        spawn_local(async move {
            let handle = state.deferred_prompt.borrow_mut().take();

            let new_state = match handle {
                Some(handle) => match drive_prompt(&handle).await {
                    Ok(outcome) if outcome == "accepted" => {
                        log::info!("✅ Aplicación instalada");
                        state.install.borrow().installed()
                    }
                    Ok(_) => {
                        log::info!("ℹ️ Instalación rechazada por el usuario");
                        state.install.borrow().dismissed()
                    }
                    Err(e) => {
                        log::error!("❌ Error durante la instalación: {}", e);
                        state.install.borrow().dismissed()
                    }
                },
                None => {
                    log::warn!("⚠️ No hay handle diferido, descartando banner");
                    state.install.borrow().dismissed()
                }
            };
            *state.install.borrow_mut() = new_state;

            if let Err(e) = storage::set_bool_flag(INSTALL_DISMISSED_KEY, true) {
                log::error!("❌ No se pudo persistir el flag de instalación: {}", e);
            }
            crate::rerender_app_with_type(UpdateType::Incremental(
                IncrementalUpdate::InstallBanner,
            ));
        });
    }

    /// Cierre explícito del banner: no volver a ofrecer en sesiones futuras
    pub fn dismiss(&self) {
        let current = *self.state.install.borrow();
        *self.state.install.borrow_mut() = current.dismissed();
        *self.state.deferred_prompt.borrow_mut() = None;

        if let Err(e) = storage::set_bool_flag(INSTALL_DISMISSED_KEY, true) {
            log::error!("❌ No se pudo persistir el flag de instalación: {}", e);
        }

        log::info!("🙈 Banner de instalación cerrado por el usuario");
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::InstallBanner));
    }
}

/// La app ya corre instalada (modo standalone)
fn is_standalone_display_mode() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(display-mode: standalone)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Conducir el handle diferido: prompt() y espera de userChoice.outcome
async fn drive_prompt(handle: &JsValue) -> Result<String, String> {
    let prompt_fn = js_sys::Reflect::get(handle, &JsValue::from_str("prompt"))
        .map_err(|e| format!("{:?}", e))?;
    let prompt_fn: js_sys::Function = prompt_fn
        .dyn_into()
        .map_err(|_| "prompt no es una función".to_string())?;
    prompt_fn.call0(handle).map_err(|e| format!("{:?}", e))?;

    let choice = js_sys::Reflect::get(handle, &JsValue::from_str("userChoice"))
        .map_err(|e| format!("{:?}", e))?;
    let promise: js_sys::Promise = choice
        .dyn_into()
        .map_err(|_| "userChoice no es una promesa".to_string())?;

    let result = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| format!("{:?}", e))?;

    js_sys::Reflect::get(&result, &JsValue::from_str("outcome"))
        .ok()
        .and_then(|v| v.as_string())
        .ok_or_else(|| "userChoice sin campo outcome".to_string())
}
