//! Per-event display customization defaults.
//!
//! The engine treats these fields as opaque; the clamping and fallback
//! rules live here so every frontend agrees on them.

use crate::event::Event;

pub const DEFAULT_COUNTER_TEXT_COLOR: &str = "#000000";
pub const DEFAULT_BACKGROUND_CONTRAST: f32 = 0.35;
pub const TEXT_COLOR_OPTIONS: [&str; 2] = ["#000000", "#FFFFFF"];

/// Overlay opacity is capped below full black/white so the background
/// image always shows through.
const MAX_CONTRAST: f32 = 0.85;

/// Clamp a contrast value into the displayable range.
/// Non-finite input falls back to the default.
pub fn clamp_contrast(value: f32) -> f32 {
    if !value.is_finite() {
        return DEFAULT_BACKGROUND_CONTRAST;
    }
    value.clamp(0.0, MAX_CONTRAST)
}

pub fn event_text_color(event: &Event) -> &str {
    event
        .counter_text_color
        .as_deref()
        .unwrap_or(DEFAULT_COUNTER_TEXT_COLOR)
}

pub fn event_contrast(event: &Event) -> f32 {
    clamp_contrast(event.background_contrast.unwrap_or(DEFAULT_BACKGROUND_CONTRAST))
}

pub fn is_light_text_color(color: &str) -> bool {
    let normalized = color.trim().to_lowercase();
    normalized == "#ffffff" || normalized == "white"
}

/// rgba() overlay placed between the background image and the counter
/// text: dark under light text, light under dark text.
pub fn card_overlay_color(text_color: &str, contrast: f32) -> String {
    let alpha = clamp_contrast(contrast);
    let channel = if is_light_text_color(text_color) { 0 } else { 255 };
    format!("rgba({channel}, {channel}, {channel}, {alpha:.2})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contrast_clamps_to_range() {
        assert_eq!(clamp_contrast(-0.5), 0.0);
        assert_eq!(clamp_contrast(0.5), 0.5);
        assert_eq!(clamp_contrast(1.2), MAX_CONTRAST);
        assert_eq!(clamp_contrast(f32::NAN), DEFAULT_BACKGROUND_CONTRAST);
    }

    #[test]
    fn light_text_gets_dark_overlay() {
        assert_eq!(card_overlay_color("#FFFFFF", 0.35), "rgba(0, 0, 0, 0.35)");
        assert_eq!(card_overlay_color("#000000", 0.35), "rgba(255, 255, 255, 0.35)");
        assert!(is_light_text_color("  WHITE "));
        assert!(!is_light_text_color("#123456"));
    }
}
