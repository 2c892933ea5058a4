// ============================================================================
// DATES - Formateo de la fecha actual igual que el campo `date` publicado
// ============================================================================

/// Fecha de hoy como DD.MM.YYYY (mismo formato que el documento de menús)
pub fn today_string() -> String {
    let today = js_sys::Date::new_0();
    format_date(
        today.get_date(),
        today.get_month() + 1,
        today.get_full_year() as u32,
    )
}

/// Formateo puro DD.MM.YYYY (js_sys::Date entrega mes base 0, el caller suma 1)
pub fn format_date(day: u32, month: u32, year: u32) -> String {
    format!("{:02}.{:02}.{}", day, month, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_pads_day_and_month() {
        assert_eq!(format_date(6, 1, 2025), "06.01.2025");
        assert_eq!(format_date(31, 12, 2024), "31.12.2024");
    }

    #[test]
    fn test_format_date_matches_published_format() {
        // Igualdad textual exacta contra el campo `date` del documento
        assert_eq!(format_date(7, 1, 2025), "07.01.2025");
        assert_ne!(format_date(7, 1, 2025), "7.1.2025");
    }
}
