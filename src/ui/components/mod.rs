//! Reusable UI building blocks.
//!
//! # Components
//!
//! - [`IconButton`]: Decorative or submit button wrapping an icon
//! - [`icons`]: SVG icon components

mod button;
mod icons;

pub use button::{ButtonVariant, IconButton};
pub use icons::*;
