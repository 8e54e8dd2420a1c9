//! Protected option fields and the extractor that enforces them.

use tracing::debug;

use crate::core::{OptionPath, OptionsTree};

use super::theme::{
    BACKGROUND_COLOR, BORDER_COLOR, TEXT_COLOR, TOOLTIP_BORDER_WIDTH, TOOLTIP_CORNER_RADIUS,
};

/// Tooltip styling the design system always supplies itself.
#[must_use]
pub fn tooltip_style_defaults() -> OptionsTree {
    OptionsTree::new()
        .with("backgroundColor", BACKGROUND_COLOR)
        .with("titleColor", TEXT_COLOR)
        .with("bodyColor", TEXT_COLOR)
        .with("borderColor", BORDER_COLOR)
        .with("borderWidth", TOOLTIP_BORDER_WIDTH)
        .with("cornerRadius", TOOLTIP_CORNER_RADIUS)
}

/// Result of stripping protected fields from caller options.
///
/// `sanitized` is the input minus every protected path; `discarded` holds
/// whatever the caller had supplied there, reassembled under the same
/// paths. The discarded fragment never reaches the composed output.
#[derive(Debug, Clone, PartialEq)]
pub struct StrippedOptions {
    pub sanitized: OptionsTree,
    pub discarded: OptionsTree,
}

/// The option paths callers can never override, independent of variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtectedFieldSet {
    paths: Vec<OptionPath>,
}

impl ProtectedFieldSet {
    /// The standard set: tooltip styling under `plugins.tooltip`.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            paths: vec![OptionPath::parse("plugins.tooltip")],
        }
    }

    #[must_use]
    pub fn paths(&self) -> &[OptionPath] {
        &self.paths
    }

    /// Returns the input with every protected path removed, never mutating
    /// the argument. Removal leaves an emptied parent tree in place, so a
    /// caller `plugins` subtree survives even when tooltip was its only
    /// entry. Absent paths are skipped.
    #[must_use]
    pub fn strip(&self, options: &OptionsTree) -> StrippedOptions {
        let mut sanitized = options.clone();
        let mut discarded = OptionsTree::new();
        for path in &self.paths {
            if let Some(removed) = sanitized.remove_path(path) {
                discarded.set_path(path, removed);
            }
        }
        if !discarded.is_empty() {
            let fields: Vec<String> = self
                .paths
                .iter()
                .filter(|path| discarded.get_path(path).is_some())
                .map(ToString::to_string)
                .collect();
            debug!(?fields, "discarded caller values for protected option fields");
        }
        StrippedOptions {
            sanitized,
            discarded,
        }
    }
}

impl Default for ProtectedFieldSet {
    fn default() -> Self {
        Self::standard()
    }
}
