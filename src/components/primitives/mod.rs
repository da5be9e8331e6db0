//! Primitives - Basic Building Blocks

pub mod button;
