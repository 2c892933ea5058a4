// ============================================================================
// VIEWMODELS - Estado + Lógica UI
// ============================================================================

pub mod install_viewmodel;
pub mod planner_viewmodel;

pub use install_viewmodel::InstallViewModel;
pub use planner_viewmodel::PlannerViewModel;
