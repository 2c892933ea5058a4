// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::models::DayRecord;
use crate::state::install_state::InstallPromptState;
use crate::state::navigation::NavigationState;
use crate::utils::constants::{DEFAULT_THEME, INSTALL_DISMISSED_KEY, THEME_KEY};
use crate::utils::storage;

/// Tipo de actualización del DOM
#[derive(Clone, Debug)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (carga del plan, cambios de estado de instalación)
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Copy, Debug)]
pub enum IncrementalUpdate {
    /// Re-renderizar solo la tarjeta del día (contenido + clase de animación)
    DayCard,
    /// Mostrar/ocultar el aviso de límite de navegación
    AlertBanner,
    /// Habilitar/deshabilitar los botones de navegación
    NavButtons,
    /// Mostrar/ocultar el banner de instalación
    InstallBanner,
}

/// Estado global de la aplicación.
/// Mutación solo a través de las operaciones de los viewmodels, nunca ambiente.
#[derive(Clone)]
pub struct AppState {
    /// Plan de comidas cargado (vacío = representación definida del fallo de carga)
    pub plan: Rc<RefCell<Vec<DayRecord>>>,
    /// Ventana de navegación; None hasta que termina la carga inicial
    pub nav: Rc<RefCell<Option<NavigationState>>>,
    /// Aviso transitorio al golpear un límite de la ventana
    pub alert_message: Rc<RefCell<Option<String>>>,
    /// Clase CSS de la animación de transición (puramente cosmética)
    pub animation_class: Rc<RefCell<String>>,
    /// Indica que la carga inicial sigue en curso (evita el error-fallback prematuro)
    pub loading: Rc<RefCell<bool>>,

    // Install prompt
    pub install: Rc<RefCell<InstallPromptState>>,
    /// Handle diferido entregado por beforeinstallprompt; capacidad opaca,
    /// nunca se inspecciona, solo se conduce vía prompt()/userChoice
    pub deferred_prompt: Rc<RefCell<Option<JsValue>>>,

    // Preferencias
    pub theme: Rc<RefCell<String>>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación, restaurando flags persistidos
    pub fn new() -> Self {
        let theme = storage::get_string(THEME_KEY).unwrap_or_else(|| DEFAULT_THEME.to_string());
        let dismissed = storage::get_bool_flag(INSTALL_DISMISSED_KEY);

        Self {
            plan: Rc::new(RefCell::new(Vec::new())),
            nav: Rc::new(RefCell::new(None)),
            alert_message: Rc::new(RefCell::new(None)),
            animation_class: Rc::new(RefCell::new(String::new())),
            loading: Rc::new(RefCell::new(true)),
            install: Rc::new(RefCell::new(InstallPromptState::from_persisted(dismissed))),
            deferred_prompt: Rc::new(RefCell::new(None)),
            theme: Rc::new(RefCell::new(theme)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Instalar el plan cargado y fijar el ancla de navegación (una vez por carga)
    pub fn set_plan(&self, plan: Vec<DayRecord>, start_index: usize) {
        *self.plan.borrow_mut() = plan;
        *self.nav.borrow_mut() = Some(NavigationState::new(start_index));
        *self.loading.borrow_mut() = false;
    }

    /// Registro del día actualmente seleccionado, si existe
    pub fn current_day(&self) -> Option<DayRecord> {
        let plan = self.plan.borrow();
        let nav = self.nav.borrow();
        resolve_current(&plan, nav.as_ref()).cloned()
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify_change(&self) {
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

/// El plan vacío (o un índice fuera de rango) no tiene día renderizable;
/// la vista muestra entonces el error-fallback.
fn resolve_current<'a>(
    plan: &'a [DayRecord],
    nav: Option<&NavigationState>,
) -> Option<&'a DayRecord> {
    plan.get(nav?.current_index())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Breakfast, MainMeal};

    fn sample_day(date: &str) -> DayRecord {
        DayRecord {
            day_name: "Pazartesi".to_string(),
            date: date.to_string(),
            breakfast: Breakfast {
                main_item: "Menemen".to_string(),
                main_item_2: "Haşlanmış Yumurta".to_string(),
                side_items: vec!["Beyaz Peynir".to_string()],
                drink: "Çay".to_string(),
                bread: "Ekmek".to_string(),
                water: "Su".to_string(),
            },
            main_meal: MainMeal {
                soup: "Mercimek Çorbası".to_string(),
                main_dish: "Tavuk Sote".to_string(),
                side_dish: "Pilav".to_string(),
                extra: "Ayran".to_string(),
                bread: "Ekmek".to_string(),
                water: "Su".to_string(),
            },
        }
    }

    #[test]
    fn test_empty_plan_has_no_renderable_day() {
        let plan: Vec<DayRecord> = Vec::new();
        let nav = NavigationState::with_window(0, 5);
        assert!(resolve_current(&plan, Some(&nav)).is_none());
        assert!(resolve_current(&plan, None).is_none());
    }

    #[test]
    fn test_current_day_follows_navigation_index() {
        let plan = vec![sample_day("06.01.2025"), sample_day("07.01.2025")];
        let mut nav = NavigationState::with_window(0, 5);
        assert_eq!(
            resolve_current(&plan, Some(&nav)).unwrap().date,
            "06.01.2025"
        );
        nav.advance(crate::state::NavDirection::Next, plan.len());
        assert_eq!(
            resolve_current(&plan, Some(&nav)).unwrap().date,
            "07.01.2025"
        );
    }
}
