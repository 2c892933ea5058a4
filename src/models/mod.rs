// ============================================================================
// MODELS - Estructuras compartidas con el documento JSON publicado
// ============================================================================

pub mod menu;

pub use menu::*;
