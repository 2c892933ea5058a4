// ============================================================================
// DAY CARD - Tarjeta con el menú completo de un día
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::DayRecord;

pub fn render(day: &DayRecord, animation_class: &str) -> Result<Element, JsValue> {
    let class = if animation_class.is_empty() {
        "day-component".to_string()
    } else {
        format!("day-component {}", animation_class)
    };
    let card = ElementBuilder::new("div")?.class(&class).id("day-card")?.build();

    let title = ElementBuilder::new("h2")?
        .class("day-title")
        .text(&day.title())
        .build();
    append_child(&card, &title)?;

    // Desayuno
    let breakfast = ElementBuilder::new("div")?.class("meal-section").build();
    let heading = ElementBuilder::new("h3")?
        .class("meal-title breakfast")
        .text("Desayuno")
        .build();
    append_child(&breakfast, &heading)?;
    append_line(&breakfast, "meal-text", &day.breakfast.main_item)?;
    append_line(&breakfast, "meal-text", &day.breakfast.main_item_2)?;
    append_line(&breakfast, "meal-text", &day.breakfast.side_items.join(", "))?;
    append_line(&breakfast, "drink-text", &day.breakfast.drink)?;
    append_line(
        &breakfast,
        "meal-text",
        &format!("{}, {}", day.breakfast.bread, day.breakfast.water),
    )?;
    append_child(&card, &breakfast)?;

    // Comida principal
    let main_meal = ElementBuilder::new("div")?.class("meal-section").build();
    let heading = ElementBuilder::new("h3")?
        .class("meal-title dinner")
        .text("Comida principal")
        .build();
    append_child(&main_meal, &heading)?;
    append_line(&main_meal, "meal-text", &day.main_meal.soup)?;
    append_line(&main_meal, "meal-text", &day.main_meal.main_dish)?;
    append_line(&main_meal, "meal-text", &day.main_meal.side_dish)?;
    append_line(&main_meal, "meal-text", &day.main_meal.extra)?;
    append_line(
        &main_meal,
        "meal-text",
        &format!("{}, {}", day.main_meal.bread, day.main_meal.water),
    )?;
    append_child(&card, &main_meal)?;

    Ok(card)
}

fn append_line(section: &Element, class: &str, text: &str) -> Result<(), JsValue> {
    let line = ElementBuilder::new("p")?.class(class).text(text).build();
    append_child(section, &line)
}
