//! Colors - Social Theme Colors

use gpui::{Rgba, rgb};

/// Color palette - All colors are accessed via associated functions
pub struct SocialColors;

impl SocialColors {
    // Backgrounds
    /// Window background
    pub fn background() -> Rgba { rgb(0xf3f4f6) }
    /// Card and page background
    pub fn surface() -> Rgba { rgb(0xffffff) }
    /// Top bar background
    pub fn header_bg() -> Rgba { rgb(0x111827) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text (counts, hints)
    pub fn text_secondary() -> Rgba { rgb(0x4b5563) }
    /// Muted text (placeholders)
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Text on dark or accent backgrounds
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Buttons
    /// Follow / submit button
    pub fn accent() -> Rgba { rgb(0x3b82f6) }
    pub fn accent_hover() -> Rgba { rgb(0x2563eb) }
    /// "Following" / secondary buttons
    pub fn muted_bg() -> Rgba { rgb(0xe5e7eb) }
    pub fn muted_hover() -> Rgba { rgb(0xd1d5db) }

    // Status colors
    pub fn success() -> Rgba { rgb(0x22c55e) }
    pub fn danger() -> Rgba { rgb(0xef4444) }

    // Borders and inputs
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    pub fn border_focus() -> Rgba { rgb(0x3b82f6) }
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
}
