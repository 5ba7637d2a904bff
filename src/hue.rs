//! Hue Labels
//!
//! Fixed palette offered for advanced elephants.

/// Selectable hues with their display labels
pub const HUE_OPTIONS: &[(u16, &str)] = &[
    (0, "Красный"),
    (30, "Оранжевый"),
    (60, "Желтый"),
    (120, "Зеленый"),
    (180, "Голубой"),
    (240, "Синий"),
    (300, "Фиолетовый"),
    (330, "Розовый"),
];

pub const HUE_NOT_SELECTED: &str = "Не выбран";

/// Default selection (red)
pub const DEFAULT_HUE: u16 = 0;

/// Human-readable name for a hue; anything off the palette is "not selected"
pub fn hue_name(hue: Option<u16>) -> &'static str {
    hue.and_then(|hue| HUE_OPTIONS.iter().find(|(value, _)| *value == hue))
        .map(|(_, label)| *label)
        .unwrap_or(HUE_NOT_SELECTED)
}
