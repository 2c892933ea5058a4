/// Clave de localStorage para la preferencia de tema
pub const THEME_KEY: &str = "theme";

/// Clave de localStorage para el flag de descarte del prompt de instalación.
/// Se mantiene el nombre histórico para no re-ofrecer a usuarios que ya lo cerraron.
pub const INSTALL_DISMISSED_KEY: &str = "installPromptDismissed";

/// Tema aplicado por defecto al documento
pub const DEFAULT_THEME: &str = "dark";
