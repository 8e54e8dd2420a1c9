use super::value::{OptionValue, OptionsTree};

/// Recursively merges `overlay` onto `base`, returning a fresh tree.
///
/// Where both sides define a key:
/// - two trees merge recursively,
/// - two sequences concatenate, base elements first,
/// - anything else resolves to the overlay value.
///
/// Keys present on one side only are taken as-is. Base keys keep their
/// order; overlay-only keys append after them.
#[must_use]
pub fn deep_merge(base: &OptionsTree, overlay: &OptionsTree) -> OptionsTree {
    let mut merged = base.clone();
    for (key, incoming) in overlay.iter() {
        let resolved = match (merged.get(key), incoming) {
            (Some(OptionValue::Tree(current)), OptionValue::Tree(patch)) => {
                OptionValue::Tree(deep_merge(current, patch))
            }
            (Some(OptionValue::Seq(current)), OptionValue::Seq(extra)) => {
                let mut joined = current.clone();
                joined.extend(extra.iter().cloned());
                OptionValue::Seq(joined)
            }
            _ => incoming.clone(),
        };
        merged.insert(key, resolved);
    }
    merged
}
