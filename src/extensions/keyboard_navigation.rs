//! Descriptor for the keyboard navigation extension.
//!
//! The extension itself ships with the renderer as an opaque registered
//! plugin; the composer only needs its registry id and the interaction
//! events it consumes.

/// Registry id the renderer knows the extension under.
pub const KEYBOARD_NAVIGATION_EXTENSION_ID: &str = "keyboard-navigation";

/// Events the extension listens for. The composer appends these to the
/// pointer events every chart receives.
pub const KEYBOARD_NAVIGATION_EVENTS: [&str; 2] = ["keydown", "keyup"];
