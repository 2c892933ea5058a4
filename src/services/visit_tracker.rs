// ============================================================================
// VISIT TRACKER - Contadores externos de visitas / usuarios activos
// ============================================================================
// Capacidad consumida, no implementada aquí: cada operación es un request
// independiente fire-and-forget contra el servicio de contadores. Los fallos
// se loguean y se ignoran (telemetría best-effort, sin retry).
// ============================================================================

use std::cell::Cell;

use gloo_net::http::Request;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::Event;

use crate::config::CONFIG;

#[derive(Clone)]
pub struct VisitTracker {
    base_url: String,
}

impl VisitTracker {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.counter_api_url().to_string(),
        }
    }

    pub async fn increment_active_users(&self) -> Result<(), String> {
        self.post_counter("/v1/counters/active-users/increment").await
    }

    pub async fn decrement_active_users(&self) -> Result<(), String> {
        self.post_counter("/v1/counters/active-users/decrement").await
    }

    pub async fn increment_total_visits(&self) -> Result<(), String> {
        self.post_counter("/v1/counters/total-visits/increment").await
    }

    async fn post_counter(&self, path: &str) -> Result<(), String> {
        let url = format!("{}{}", self.base_url, path);
        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }
        Ok(())
    }

    /// Registrar la visita al montar la app (activos + total), fire-and-forget
    pub fn track_mount(&self) {
        let tracker = self.clone();
        spawn_local(async move {
            if let Err(e) = tracker.increment_active_users().await {
                log::error!("❌ No se pudo incrementar usuarios activos: {}", e);
            }
            if let Err(e) = tracker.increment_total_visits().await {
                log::error!("❌ No se pudo incrementar el total de visitas: {}", e);
            }
        });
    }
}

impl Default for VisitTracker {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static UNLOAD_LISTENER_REGISTERED: Cell<bool> = Cell::new(false);
}

/// Registrar el decremento de usuarios activos en 'pagehide'.
/// Best-effort: el navegador no garantiza el timing en el unload, así que el
/// decremento puede perderse (limitación conocida, no un bug a arreglar).
/// Solo se registra una vez (mismo patrón que los listeners globales de red).
pub fn register_unload_listener() -> Result<(), JsValue> {
    let already = UNLOAD_LISTENER_REGISTERED.with(|flag| flag.replace(true));
    if already {
        log::warn!("⚠️ VisitTracker: listener de unload ya registrado, ignorando");
        return Ok(());
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;

    let closure = Closure::wrap(Box::new(move |_event: Event| {
        let tracker = VisitTracker::new();
        spawn_local(async move {
            if let Err(e) = tracker.decrement_active_users().await {
                log::error!("❌ No se pudo decrementar usuarios activos: {}", e);
            }
        });
    }) as Box<dyn FnMut(Event)>);

    window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
    // forget() mantiene vivo el closure; el listener global dura toda la app
    closure.forget();

    log::info!("✅ VisitTracker: listener de unload registrado");
    Ok(())
}
