//! Registry of live drag-to-scroll controllers.
//!
//! Controllers register on construction and leave on [`DragToScroll::destroy`].
//! The registry holds a strong handle, so an attached controller stays alive
//! until it is destroyed explicitly. Bulk operations iterate a snapshot, which
//! lets a controller be destroyed while another one is being disposed.

use crate::drag_to_scroll::{DragToScroll, InstanceId};
use grabscroll_foundation::ScrollTarget;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static INSTANCES: RefCell<IndexMap<InstanceId, DragToScroll>> =
        RefCell::new(IndexMap::new());
}

pub(crate) fn register(instance: &DragToScroll) {
    INSTANCES.with(|instances| {
        instances
            .borrow_mut()
            .insert(instance.id(), instance.clone());
    });
}

pub(crate) fn unregister(id: InstanceId) -> bool {
    INSTANCES.with(|instances| instances.borrow_mut().shift_remove(&id).is_some())
}

/// Live controllers in creation order.
pub fn instances() -> Vec<DragToScroll> {
    INSTANCES.with(|instances| instances.borrow().values().cloned().collect())
}

pub fn instance_count() -> usize {
    INSTANCES.with(|instances| instances.borrow().len())
}

pub fn find(id: InstanceId) -> Option<DragToScroll> {
    INSTANCES.with(|instances| instances.borrow().get(&id).cloned())
}

/// Destroys every controller matching `predicate`. Returns how many were
/// destroyed.
pub fn destroy_where(mut predicate: impl FnMut(&DragToScroll) -> bool) -> usize {
    let mut destroyed = 0;
    for instance in instances() {
        if !instance.is_destroyed() && predicate(&instance) {
            instance.destroy();
            destroyed += 1;
        }
    }
    destroyed
}

pub fn destroy_all() -> usize {
    let destroyed = destroy_where(|_| true);
    log::debug!("destroyed all {destroyed} drag-to-scroll instance(s)");
    destroyed
}

/// Destroys the controllers attached to `target`.
pub fn destroy_for_target(target: &dyn ScrollTarget) -> usize {
    let wanted = target as *const dyn ScrollTarget as *const ();
    destroy_where(|instance| std::ptr::eq(Rc::as_ptr(&instance.target()) as *const (), wanted))
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
