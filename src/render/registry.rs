use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::card::{Element, ElementKind};

use super::context::RenderContext;
use super::errors::FallbackSignal;
use super::tag::QmlTag;

/// A type-specific routine that converts one element into a QML tag.
pub type RenderRoutine =
    Arc<dyn Fn(&Element, &mut RenderContext) -> Result<QmlTag, FallbackSignal>>;

/// Registry mapping element kinds to render routines.
///
/// Lookup tries the exact kind first, then walks the ancestor chain so a
/// routine registered under an abstract kind (e.g. `Input`) handles every
/// descendant without its own registration.
#[derive(Clone, Default)]
pub struct ElementRenderers {
    routines: HashMap<ElementKind, RenderRoutine>,
}

impl ElementRenderers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a routine for a kind, replacing any previous registration.
    pub fn register<F>(&mut self, kind: ElementKind, routine: F)
    where
        F: Fn(&Element, &mut RenderContext) -> Result<QmlTag, FallbackSignal> + 'static,
    {
        self.routines.insert(kind, Arc::new(routine));
    }

    pub fn remove(&mut self, kind: ElementKind) {
        self.routines.remove(&kind);
    }

    /// Routine for the exact kind, or the nearest registered ancestor kind.
    pub fn lookup(&self, kind: ElementKind) -> Option<RenderRoutine> {
        let mut current = Some(kind);
        while let Some(kind) = current {
            if let Some(routine) = self.routines.get(&kind) {
                return Some(Arc::clone(routine));
            }
            current = kind.ancestor();
        }
        None
    }
}

impl fmt::Debug for ElementRenderers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRenderers")
            .field("registered", &self.routines.keys().collect::<Vec<_>>())
            .finish()
    }
}
