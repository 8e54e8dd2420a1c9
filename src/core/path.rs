use std::fmt;

use smallvec::SmallVec;

use super::value::{OptionValue, OptionsTree};

/// A dotted field path into an options tree, such as `plugins.tooltip`.
///
/// Schema keys never contain dots, so the dotted form is unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionPath {
    segments: SmallVec<[String; 4]>,
}

impl OptionPath {
    #[must_use]
    pub fn new<I>(segments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a dotted path, ignoring empty segments.
    #[must_use]
    pub fn parse(dotted: &str) -> Self {
        Self {
            segments: dotted
                .split('.')
                .filter(|segment| !segment.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for OptionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl OptionsTree {
    /// Returns the value at `path`, or `None` when any segment is missing
    /// or crosses a non-tree value. The empty path addresses nothing.
    #[must_use]
    pub fn get_path(&self, path: &OptionPath) -> Option<&OptionValue> {
        let (leaf, parents) = path.segments().split_last()?;
        let mut current = self;
        for segment in parents {
            current = current.get(segment)?.as_tree()?;
        }
        current.get(leaf)
    }

    /// Sets the value at `path`, creating intermediate trees as needed.
    /// An intermediate holding a non-tree value is replaced by a fresh tree.
    /// The empty path is a no-op.
    pub fn set_path(&mut self, path: &OptionPath, value: impl Into<OptionValue>) {
        let Some((leaf, parents)) = path.segments().split_last() else {
            return;
        };
        let mut current = &mut self.entries;
        for segment in parents {
            let slot = current
                .entry(segment.clone())
                .or_insert_with(|| OptionValue::Tree(OptionsTree::new()));
            if !matches!(slot, OptionValue::Tree(_)) {
                *slot = OptionValue::Tree(OptionsTree::new());
            }
            let OptionValue::Tree(next) = slot else {
                return;
            };
            current = &mut next.entries;
        }
        current.insert(leaf.clone(), value.into());
    }

    /// Removes and returns the value at `path`. Siblings keep their order
    /// and a parent tree left empty by the removal stays in place. An
    /// absent path is a no-op returning `None`.
    pub fn remove_path(&mut self, path: &OptionPath) -> Option<OptionValue> {
        let (leaf, parents) = path.segments().split_last()?;
        let mut current = &mut self.entries;
        for segment in parents {
            match current.get_mut(segment) {
                Some(OptionValue::Tree(next)) => current = &mut next.entries,
                _ => return None,
            }
        }
        current.shift_remove(leaf)
    }
}
