// ============================================================================
// PLANNER VIEWMODEL - Carga del plan + navegación entre días
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;

use crate::config::CONFIG;
use crate::services::menu_service::{resolve_initial_index, MenuService};
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::state::{NavDirection, NavLimit, NavOutcome};
use crate::utils::dates;

pub struct PlannerViewModel {
    state: AppState,
}

impl PlannerViewModel {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Cargar el menú y anclar la navegación al día de hoy (o al índice 0)
    pub fn load_menu(&self) {
        let state = self.state.clone();
        spawn_local(async move {
            let service = MenuService::new();
            let plan = service.load().await;

            let today = dates::today_string();
            let start_index = resolve_initial_index(&plan, &today);
            if plan.get(start_index).map(|d| d.date == today) == Some(true) {
                log::info!("📅 Día de hoy encontrado en el plan: índice {}", start_index);
            } else {
                log::info!("📅 Hoy ({}) no está en el plan, anclando en el índice 0", today);
            }

            state.set_plan(plan, start_index);
            state.notify_change();
        });
    }

    /// Transición de navegación con animación de salida/entrada.
    /// El clamp corre dentro del timeout; re-aplicarlo es idempotente, por lo
    /// que un segundo gesto durante la animación no rompe el invariante.
    pub fn handle_navigation(&self, direction: NavDirection) {
        if self.state.nav.borrow().is_none() {
            return;
        }

        *self.state.animation_class.borrow_mut() = slide_out_class(direction).to_string();
        crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::DayCard));

        let state = self.state.clone();
        Timeout::new(CONFIG.ui_config.animation_ms, move || {
            let len = state.plan.borrow().len();
            let outcome = {
                let mut nav = state.nav.borrow_mut();
                nav.as_mut().map(|n| n.advance(direction, len))
            };

            if let Some(outcome) = outcome {
                match outcome {
                    NavOutcome::Moved(index) => {
                        log::info!("📅 Navegación aceptada: índice {}", index);
                    }
                    NavOutcome::Rejected(limit) => {
                        log::info!("⛔ Límite de la ventana alcanzado: {:?}", limit);
                        schedule_alert_hide(&state);
                    }
                }
                *state.alert_message.borrow_mut() = advisory_for(outcome);
            }

            *state.animation_class.borrow_mut() = slide_in_class(direction).to_string();
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::DayCard));
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::AlertBanner));
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::NavButtons));
        })
        .forget();
    }
}

fn slide_out_class(direction: NavDirection) -> &'static str {
    match direction {
        NavDirection::Next => "slide-out-left",
        NavDirection::Prev => "slide-out-right",
    }
}

fn slide_in_class(direction: NavDirection) -> &'static str {
    match direction {
        NavDirection::Next => "slide-in-right",
        NavDirection::Prev => "slide-in-left",
    }
}

/// Aviso resultante de una transición: el rechazo lo pone, la aceptación lo limpia
pub fn advisory_for(outcome: NavOutcome) -> Option<String> {
    match outcome {
        NavOutcome::Moved(_) => None,
        NavOutcome::Rejected(limit) => Some(limit_message(limit)),
    }
}

pub fn limit_message(limit: NavLimit) -> String {
    let days = CONFIG.ui_config.nav_window_days;
    match limit {
        NavLimit::Forward => {
            format!("Solo puedes ver el menú hasta {} días hacia adelante.", days)
        }
        NavLimit::Backward => {
            format!("Solo puedes ver el menú hasta {} días hacia atrás.", days)
        }
    }
}

/// El aviso es transitorio: se oculta solo tras un tiempo corto
fn schedule_alert_hide(state: &AppState) {
    let state = state.clone();
    Timeout::new(CONFIG.ui_config.alert_hide_ms, move || {
        if state.alert_message.borrow().is_some() {
            *state.alert_message.borrow_mut() = None;
            crate::rerender_app_with_type(UpdateType::Incremental(IncrementalUpdate::AlertBanner));
        }
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NavigationState;

    #[test]
    fn test_rejection_sets_advisory_and_next_move_clears_it() {
        let mut nav = NavigationState::with_window(0, 5);

        // Rechazo hacia atrás → aviso presente
        let outcome = nav.advance(NavDirection::Prev, 10);
        let advisory = advisory_for(outcome);
        assert!(advisory.is_some());
        assert!(advisory.unwrap().contains("atrás"));

        // Navegación válida posterior → el aviso se limpia
        let outcome = nav.advance(NavDirection::Next, 10);
        assert_eq!(advisory_for(outcome), None);
    }

    #[test]
    fn test_limit_messages_mention_window_size() {
        assert!(limit_message(NavLimit::Forward).contains('5'));
        assert!(limit_message(NavLimit::Backward).contains('5'));
    }

    #[test]
    fn test_slide_classes_match_direction() {
        assert_eq!(slide_out_class(NavDirection::Next), "slide-out-left");
        assert_eq!(slide_in_class(NavDirection::Next), "slide-in-right");
        assert_eq!(slide_out_class(NavDirection::Prev), "slide-out-right");
        assert_eq!(slide_in_class(NavDirection::Prev), "slide-in-left");
    }
}
