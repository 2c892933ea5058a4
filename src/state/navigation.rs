// ============================================================================
// NAVIGATION - Ventana navegable de ±N días anclada al día de inicio
// ============================================================================
// El índice de inicio queda fijo una vez por carga (día de hoy resuelto, o 0).
// Invariante: max(start-N, 0) <= current <= min(start+N, len-1).
// ============================================================================

use crate::config::CONFIG;

/// Dirección de una transición de navegación
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDirection {
    Next,
    Prev,
}

/// Límite alcanzado al rechazar una transición
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavLimit {
    Forward,
    Backward,
}

/// Resultado de una transición: movimiento aceptado o rechazo en el límite.
/// El rechazo no es un error, es un no-op definido con aviso al usuario.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    Moved(usize),
    Rejected(NavLimit),
}

#[derive(Clone, Copy, Debug)]
pub struct NavigationState {
    current_index: usize,
    start_index: usize,
    window: usize,
}

impl NavigationState {
    pub fn new(start_index: usize) -> Self {
        Self::with_window(start_index, CONFIG.ui_config.nav_window_days)
    }

    pub fn with_window(start_index: usize, window: usize) -> Self {
        Self {
            current_index: start_index,
            start_index,
            window,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Límite superior de la ventana para un plan de longitud `len`
    pub fn upper_bound(&self, len: usize) -> usize {
        (self.start_index + self.window).min(len.saturating_sub(1))
    }

    /// Límite inferior de la ventana
    pub fn lower_bound(&self) -> usize {
        self.start_index.saturating_sub(self.window)
    }

    pub fn can_go_next(&self, len: usize) -> bool {
        self.current_index < self.upper_bound(len)
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_index > self.lower_bound()
    }

    /// Aplica una transición. Si el índice propuesto sale de la ventana, el
    /// estado no cambia y se reporta el límite alcanzado.
    pub fn advance(&mut self, direction: NavDirection, len: usize) -> NavOutcome {
        match direction {
            NavDirection::Next => {
                let proposed = self.current_index + 1;
                if proposed > self.upper_bound(len) {
                    NavOutcome::Rejected(NavLimit::Forward)
                } else {
                    self.current_index = proposed;
                    NavOutcome::Moved(proposed)
                }
            }
            NavDirection::Prev => {
                if self.current_index <= self.lower_bound() {
                    NavOutcome::Rejected(NavLimit::Backward)
                } else {
                    self.current_index -= 1;
                    NavOutcome::Moved(self.current_index)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_sequence_with_start_3_len_10() {
        // Escenario de referencia: len=10, start=3 → tope en min(3+5, 9) = 8
        let mut nav = NavigationState::with_window(3, 5);
        let mut visited = Vec::new();
        for _ in 0..5 {
            match nav.advance(NavDirection::Next, 10) {
                NavOutcome::Moved(idx) => visited.push(idx),
                NavOutcome::Rejected(_) => panic!("no debería rechazar dentro de la ventana"),
            }
        }
        assert_eq!(visited, vec![4, 5, 6, 7, 8]);

        // El sexto `next` se rechaza y el índice no cambia
        assert_eq!(
            nav.advance(NavDirection::Next, 10),
            NavOutcome::Rejected(NavLimit::Forward)
        );
        assert_eq!(nav.current_index(), 8);
    }

    #[test]
    fn test_repeated_navigation_never_escapes_window() {
        for len in 1..=15usize {
            for start in 0..len {
                let mut nav = NavigationState::with_window(start, 5);
                for _ in 0..30 {
                    nav.advance(NavDirection::Next, len);
                    assert!(nav.current_index() <= nav.upper_bound(len));
                }
                for _ in 0..30 {
                    nav.advance(NavDirection::Prev, len);
                    assert!(nav.current_index() >= nav.lower_bound());
                }
            }
        }
    }

    #[test]
    fn test_lower_bound_clamps_to_zero() {
        // start=2 con ventana 5: el límite inferior es 0, no negativo
        let mut nav = NavigationState::with_window(2, 5);
        assert_eq!(nav.lower_bound(), 0);
        assert_eq!(nav.advance(NavDirection::Prev, 10), NavOutcome::Moved(1));
        assert_eq!(nav.advance(NavDirection::Prev, 10), NavOutcome::Moved(0));
        assert_eq!(
            nav.advance(NavDirection::Prev, 10),
            NavOutcome::Rejected(NavLimit::Backward)
        );
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_upper_bound_clamps_to_plan_length() {
        // start=4 con plan de 6 días: el tope es len-1 = 5, no start+5
        let mut nav = NavigationState::with_window(4, 5);
        assert_eq!(nav.upper_bound(6), 5);
        assert_eq!(nav.advance(NavDirection::Next, 6), NavOutcome::Moved(5));
        assert_eq!(
            nav.advance(NavDirection::Next, 6),
            NavOutcome::Rejected(NavLimit::Forward)
        );
    }

    #[test]
    fn test_single_day_plan_rejects_both_directions() {
        let mut nav = NavigationState::with_window(0, 5);
        assert_eq!(
            nav.advance(NavDirection::Next, 1),
            NavOutcome::Rejected(NavLimit::Forward)
        );
        assert_eq!(
            nav.advance(NavDirection::Prev, 1),
            NavOutcome::Rejected(NavLimit::Backward)
        );
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_can_go_helpers_match_bounds() {
        let nav = NavigationState::with_window(3, 5);
        assert!(nav.can_go_next(10));
        assert!(nav.can_go_prev());

        let edge = NavigationState::with_window(0, 5);
        assert!(!edge.can_go_prev());
    }
}
