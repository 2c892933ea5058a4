// ============================================================================
// MENU MODELS - Un día completo del plan de comidas (desayuno + comida principal)
// ============================================================================

use serde::{Deserialize, Serialize};

/// Desayuno de un día
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakfast {
    pub main_item: String,
    pub main_item_2: String,
    /// Acompañamientos en el orden publicado
    #[serde(default)]
    pub side_items: Vec<String>,
    pub drink: String,
    pub bread: String,
    pub water: String,
}

/// Comida principal (almuerzo/cena)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainMeal {
    pub soup: String,
    pub main_dish: String,
    pub side_dish: String,
    pub extra: String,
    pub bread: String,
    pub water: String,
}

/// Registro de un día del calendario de menús
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub day_name: String,
    /// Fecha en formato local DD.MM.YYYY (igualdad textual con la fecha de hoy)
    pub date: String,
    pub breakfast: Breakfast,
    pub main_meal: MainMeal,
}

impl DayRecord {
    /// Título mostrado en la cabecera del día
    pub fn title(&self) -> String {
        format!("{}, {}", self.day_name, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_record_deserialization() {
        let json = r#"{
            "day_name": "Pazartesi",
            "date": "06.01.2025",
            "breakfast": {
                "main_item": "Menemen",
                "main_item_2": "Haşlanmış Yumurta",
                "side_items": ["Beyaz Peynir", "Siyah Zeytin", "Bal"],
                "drink": "Çay",
                "bread": "Ekmek",
                "water": "Su"
            },
            "main_meal": {
                "soup": "Mercimek Çorbası",
                "main_dish": "Tavuk Sote",
                "side_dish": "Bulgur Pilavı",
                "extra": "Ayran",
                "bread": "Ekmek",
                "water": "Su"
            }
        }"#;

        let day: DayRecord = serde_json::from_str(json).unwrap();
        assert_eq!(day.date, "06.01.2025");
        assert_eq!(day.title(), "Pazartesi, 06.01.2025");
        assert_eq!(day.breakfast.side_items.len(), 3);
        assert_eq!(day.main_meal.soup, "Mercimek Çorbası");
    }

    #[test]
    fn test_side_items_optional() {
        // side_items puede faltar en el documento publicado
        let json = r#"{
            "day_name": "Salı",
            "date": "07.01.2025",
            "breakfast": {
                "main_item": "Sigara Böreği",
                "main_item_2": "Haşlanmış Yumurta",
                "drink": "Çay",
                "bread": "Ekmek",
                "water": "Su"
            },
            "main_meal": {
                "soup": "Ezogelin Çorbası",
                "main_dish": "İzmir Köfte",
                "side_dish": "Makarna",
                "extra": "Yoğurt",
                "bread": "Ekmek",
                "water": "Su"
            }
        }"#;

        let day: DayRecord = serde_json::from_str(json).unwrap();
        assert!(day.breakfast.side_items.is_empty());
    }
}
