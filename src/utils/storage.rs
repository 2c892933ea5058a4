use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Leer un valor string plano (los flags se guardan sin serializar, como el original)
pub fn get_string(key: &str) -> Option<String> {
    let storage = get_local_storage()?;
    storage.get_item(key).ok()?
}

pub fn set_string(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .set_item(key, value)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

/// Flag booleano persistido como "true"/"false"
pub fn get_bool_flag(key: &str) -> bool {
    matches!(get_string(key).as_deref(), Some("true"))
}

pub fn set_bool_flag(key: &str, value: bool) -> Result<(), String> {
    set_string(key, if value { "true" } else { "false" })
}
