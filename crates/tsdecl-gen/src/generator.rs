//! Breadth-first closure discovery over the type graph.

use std::collections::VecDeque;

use indexmap::IndexMap;
use tsdecl_core::{TypeId, TypeModel};

use crate::Result;
use crate::define::Define;
use crate::namespace;

/// Walk state for one closure discovery.
///
/// Types are nodes, member references are edges. The mapper pushes edge
/// targets onto `pending` as a side effect of building type expressions,
/// so extraction of one type feeds the next round of the walk.
pub(crate) struct Generator<'a> {
    pub(super) model: &'a TypeModel,
    /// Extracted records; insertion order is discovery order.
    pub(super) visited: IndexMap<TypeId, Define>,
    /// Discovered but not yet extracted.
    pub(super) pending: VecDeque<TypeId>,
}

impl<'a> Generator<'a> {
    pub(crate) fn new(model: &'a TypeModel) -> Self {
        Self {
            model,
            visited: IndexMap::new(),
            pending: VecDeque::new(),
        }
    }

    /// Extract the root, then drain the pending queue to a fixpoint.
    ///
    /// The root bypasses the built-in filter. Every other dequeued type is
    /// skipped if it was extracted meanwhile or lives in the built-in
    /// namespace; references to those already resolved through the
    /// primitive table or degraded to a bare name.
    pub(crate) fn run(mut self, root: TypeId) -> Result<IndexMap<TypeId, Define>> {
        let define = self.extract(root)?;
        self.visited.insert(root, define);

        while let Some(id) = self.pending.pop_front() {
            if self.visited.contains_key(&id) {
                continue;
            }
            if namespace::is_builtin(&self.model.info(id).qualified_name) {
                continue;
            }
            let define = self.extract(id)?;
            self.visited.insert(id, define);
        }

        Ok(self.visited)
    }

    /// Queue a type for extraction unless it already has a record.
    ///
    /// The queue may hold duplicates; the dequeue-side visited check makes
    /// that harmless.
    pub(super) fn enqueue(&mut self, id: TypeId) {
        if !self.visited.contains_key(&id) {
            self.pending.push_back(id);
        }
    }
}
