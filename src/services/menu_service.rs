// ============================================================================
// MENU SERVICE - Carga del documento JSON de menús (stateless)
// ============================================================================
// Contrato del loader: cualquier fallo (red, HTTP, formato) se loguea y se
// sustituye por el plan vacío; el caller nunca recibe el error.
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::DayRecord;

/// Servicio de carga del menú publicado
pub struct MenuService {
    url: String,
    list_field: String,
}

impl MenuService {
    pub fn new() -> Self {
        Self {
            url: CONFIG.menu_url.clone(),
            list_field: CONFIG.menu_list_field.clone(),
        }
    }

    /// Cargar el plan de comidas. En fallo devuelve el plan vacío (nunca propaga).
    pub async fn load(&self) -> Vec<DayRecord> {
        match self.fetch_plan().await {
            Ok(plan) => {
                log::info!("✅ Plan de comidas cargado: {} días", plan.len());
                plan
            }
            Err(e) => {
                log::error!("❌ Error cargando el plan de comidas: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_plan(&self) -> Result<Vec<DayRecord>, String> {
        let response = Request::get(&self.url)
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

        let body = response
            .text()
            .await
            .map_err(|e| format!("Body error: {}", e))?;

        parse_plan(&body, &self.list_field)
    }
}

impl Default for MenuService {
    fn default() -> Self {
        Self::new()
    }
}

/// Extraer la lista de días del documento publicado.
/// El campo raíz es un identificador mes/año elegido por el publicador.
pub fn parse_plan(body: &str, list_field: &str) -> Result<Vec<DayRecord>, String> {
    let document: serde_json::Value =
        serde_json::from_str(body).map_err(|e| format!("Parse error: {}", e))?;

    let list = document
        .get(list_field)
        .ok_or_else(|| format!("Campo '{}' ausente en el documento", list_field))?;

    if !list.is_array() {
        return Err(format!("El campo '{}' no es una lista", list_field));
    }

    serde_json::from_value(list.clone()).map_err(|e| format!("Formato de día inválido: {}", e))
}

/// Resolver el índice inicial: primer día cuya fecha coincide exactamente con
/// la de hoy, o 0 si no hay coincidencia (incluido el plan vacío — el caller
/// debe guardar por separado el caso de indexar una lista vacía).
pub fn resolve_initial_index(plan: &[DayRecord], today: &str) -> usize {
    plan.iter().position(|day| day.date == today).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_json(date: &str) -> String {
        format!(
            r#"{{
                "day_name": "Çarşamba",
                "date": "{}",
                "breakfast": {{
                    "main_item": "Menemen",
                    "main_item_2": "Haşlanmış Yumurta",
                    "side_items": ["Beyaz Peynir", "Zeytin"],
                    "drink": "Çay",
                    "bread": "Ekmek",
                    "water": "Su"
                }},
                "main_meal": {{
                    "soup": "Mercimek Çorbası",
                    "main_dish": "Karnıyarık",
                    "side_dish": "Pirinç Pilavı",
                    "extra": "Cacık",
                    "bread": "Ekmek",
                    "water": "Su"
                }}
            }}"#,
            date
        )
    }

    fn document(field: &str, dates: &[&str]) -> String {
        let days: Vec<String> = dates.iter().map(|d| day_json(d)).collect();
        format!(r#"{{"{}": [{}]}}"#, field, days.join(","))
    }

    #[test]
    fn test_parse_plan_valid_document() {
        let body = document("ocak_2025", &["06.01.2025", "07.01.2025"]);
        let plan = parse_plan(&body, "ocak_2025").unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[1].date, "07.01.2025");
    }

    #[test]
    fn test_parse_plan_missing_field_fails() {
        let body = document("subat_2025", &["06.01.2025"]);
        let err = parse_plan(&body, "ocak_2025").unwrap_err();
        assert!(err.contains("ocak_2025"));
    }

    #[test]
    fn test_parse_plan_field_not_a_list_fails() {
        let body = r#"{"ocak_2025": "no soy una lista"}"#;
        assert!(parse_plan(body, "ocak_2025").is_err());
    }

    #[test]
    fn test_parse_plan_malformed_json_fails() {
        assert!(parse_plan("{{{", "ocak_2025").is_err());
    }

    #[test]
    fn test_parse_plan_malformed_day_record_fails() {
        let body = r#"{"ocak_2025": [{"date": "06.01.2025"}]}"#;
        assert!(parse_plan(body, "ocak_2025").is_err());
    }

    #[test]
    fn test_resolve_initial_index_exact_match() {
        let body = document("ocak_2025", &["06.01.2025", "07.01.2025", "08.01.2025"]);
        let plan = parse_plan(&body, "ocak_2025").unwrap();
        assert_eq!(resolve_initial_index(&plan, "07.01.2025"), 1);
    }

    #[test]
    fn test_resolve_initial_index_first_match_wins() {
        let body = document("ocak_2025", &["06.01.2025", "06.01.2025"]);
        let plan = parse_plan(&body, "ocak_2025").unwrap();
        assert_eq!(resolve_initial_index(&plan, "06.01.2025"), 0);
    }

    #[test]
    fn test_resolve_initial_index_no_match_falls_back_to_zero() {
        let body = document("ocak_2025", &["06.01.2025"]);
        let plan = parse_plan(&body, "ocak_2025").unwrap();
        assert_eq!(resolve_initial_index(&plan, "31.12.2024"), 0);
    }

    #[test]
    fn test_resolve_initial_index_empty_plan() {
        assert_eq!(resolve_initial_index(&[], "06.01.2025"), 0);
    }
}
