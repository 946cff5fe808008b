//! Style classes on the page root

use crate::Result;
use std::collections::BTreeSet;

/// Adds and removes marker classes on the document root element
pub trait StyleApplier {
    fn add_class(&mut self, class: &str) -> Result<()>;

    fn remove_class(&mut self, class: &str) -> Result<()>;
}

/// In-memory class list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassSet {
    classes: BTreeSet<String>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ClassSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            classes: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl StyleApplier for ClassSet {
    fn add_class(&mut self, class: &str) -> Result<()> {
        self.classes.insert(class.to_string());
        Ok(())
    }

    fn remove_class(&mut self, class: &str) -> Result<()> {
        self.classes.remove(class);
        Ok(())
    }
}
