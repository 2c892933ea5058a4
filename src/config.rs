use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub menu_url: String,
    /// Nombre del campo raíz del documento JSON publicado (identificador mes/año
    /// elegido por quien publica el menú, p.ej. "ocak_2025")
    pub menu_list_field: String,
    pub counter_api_development: String,
    pub counter_api_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub ui_config: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Radio de la ventana navegable alrededor del día de inicio (±N días)
    pub nav_window_days: usize,
    /// Duración de la animación de transición entre días (ms)
    pub animation_ms: u32,
    /// Tiempo que permanece visible el aviso de límite (ms)
    pub alert_hide_ms: u32,
    /// Desplazamiento mínimo para registrar un gesto de swipe (px)
    pub swipe_threshold_px: i32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            nav_window_days: 5,
            animation_ms: 300,
            alert_hide_ms: 2500,
            swipe_threshold_px: 50,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            menu_url: "/menu.json".to_string(),
            menu_list_field: "ocak_2025".to_string(),
            counter_api_development: "http://localhost:3000".to_string(),
            counter_api_production: "https://counters.kykyemek.app".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            ui_config: UiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            menu_url: option_env!("MENU_URL")
                .unwrap_or("/menu.json").to_string(),
            menu_list_field: option_env!("MENU_LIST_FIELD")
                .unwrap_or("ocak_2025").to_string(),
            counter_api_development: option_env!("COUNTER_API_DEVELOPMENT")
                .unwrap_or("http://localhost:3000").to_string(),
            counter_api_production: option_env!("COUNTER_API_PRODUCTION")
                .unwrap_or("https://counters.kykyemek.app").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            ui_config: UiConfig {
                nav_window_days: option_env!("NAV_WINDOW_DAYS")
                    .unwrap_or("5").parse().unwrap_or(5),
                animation_ms: option_env!("ANIMATION_MS")
                    .unwrap_or("300").parse().unwrap_or(300),
                alert_hide_ms: option_env!("ALERT_HIDE_MS")
                    .unwrap_or("2500").parse().unwrap_or(2500),
                swipe_threshold_px: option_env!("SWIPE_THRESHOLD_PX")
                    .unwrap_or("50").parse().unwrap_or(50),
            },
        }
    }

    /// Obtiene la URL del servicio de contadores según el entorno actual
    pub fn counter_api_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.counter_api_production,
            _ => &self.counter_api_development,
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
