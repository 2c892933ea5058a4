// ============================================================================
// STATE - Estado global + máquinas de estado puras
// ============================================================================

pub mod app_state;
pub mod install_state;
pub mod navigation;

pub use install_state::InstallPromptState;
pub use navigation::{NavDirection, NavLimit, NavOutcome, NavigationState};
