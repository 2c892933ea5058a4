// ============================================================================
// SERVICES - SOLO comunicación I/O (stateless)
// ============================================================================

pub mod menu_service;
pub mod visit_tracker;

pub use menu_service::MenuService;
pub use visit_tracker::VisitTracker;
