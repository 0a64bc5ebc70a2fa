//! Document-root mutation contracts and adapters.

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    rc::Rc,
};

use crate::HostError;

/// Host service for the document root element (`<html>`).
pub trait DocumentRoot {
    /// Adds (`enabled == true`) or removes a marker class on the root element.
    ///
    /// # Errors
    ///
    /// Returns an error when no document root is available.
    fn set_class(&self, class: &str, enabled: bool) -> Result<(), HostError>;

    /// Sets an inline style property on the root element.
    ///
    /// # Errors
    ///
    /// Returns an error when no document root is available.
    fn set_style_property(&self, property: &str, value: &str) -> Result<(), HostError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Document root for non-document targets; every mutation reports the capability as unavailable.
pub struct NoopDocumentRoot;

impl DocumentRoot for NoopDocumentRoot {
    fn set_class(&self, _class: &str, _enabled: bool) -> Result<(), HostError> {
        Err(HostError::unavailable("document"))
    }

    fn set_style_property(&self, _property: &str, _value: &str) -> Result<(), HostError> {
        Err(HostError::unavailable("document"))
    }
}

/// Observable state of a [`MemoryDocumentRoot`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSnapshot {
    /// Classes present on the root element.
    pub classes: BTreeSet<String>,
    /// Inline style properties on the root element.
    pub style: BTreeMap<String, String>,
}

impl DocumentSnapshot {
    /// Returns whether `class` is present.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Returns the inline value of `property`.
    pub fn style_property(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
/// Recording in-memory document root. Clones share state.
pub struct MemoryDocumentRoot {
    inner: Rc<RefCell<DocumentSnapshot>>,
}

impl MemoryDocumentRoot {
    /// Returns the current root element state.
    pub fn snapshot(&self) -> DocumentSnapshot {
        self.inner.borrow().clone()
    }
}

impl DocumentRoot for MemoryDocumentRoot {
    fn set_class(&self, class: &str, enabled: bool) -> Result<(), HostError> {
        let mut inner = self.inner.borrow_mut();
        if enabled {
            inner.classes.insert(class.to_string());
        } else {
            inner.classes.remove(class);
        }
        Ok(())
    }

    fn set_style_property(&self, property: &str, value: &str) -> Result<(), HostError> {
        self.inner
            .borrow_mut()
            .style
            .insert(property.to_string(), value.to_string());
        Ok(())
    }
}
