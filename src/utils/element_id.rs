use std::sync::atomic::{AtomicUsize, Ordering};

use gpui::{ElementId, SharedString};

pub trait ElementIdExt {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId;
}

impl ElementIdExt for ElementId {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId {
        ElementId::NamedChild(Box::new(self.clone()), suffix.into())
    }
}

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Generates a process-unique id of the form `<prefix>-<n>`.
pub fn generate_element_id(prefix: &str) -> ElementId {
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    ElementId::Name(SharedString::from(format!("{prefix}-{n}")))
}
