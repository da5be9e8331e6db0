//! Components - Reusable GPUI Widgets

pub mod primitives;
pub mod toast;
