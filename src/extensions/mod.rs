//! Renderer extensions the design system ships charts with.

pub mod keyboard_navigation;

pub use keyboard_navigation::{KEYBOARD_NAVIGATION_EVENTS, KEYBOARD_NAVIGATION_EXTENSION_ID};
