use crate::route::value::Route;
use hashbrown::HashMap;
use parking_lot::Mutex;
use std::sync::Arc;

/// Live view handle owned by the rendering collaborator.
pub trait ViewInstance: Send + Sync {
    /// True while the instance is shutting down; entered callbacks are
    /// skipped for it.
    fn is_being_torn_down(&self) -> bool {
        false
    }
}

/// One-shot notification fired with the slot's live instance when its
/// owning record becomes active.
pub type EnteredCallback = Box<dyn FnOnce(&dyn ViewInstance) + Send>;

#[derive(Default)]
struct SlotEntry {
    instance: Option<Arc<dyn ViewInstance>>,
    entered_cbs: Vec<EnteredCallback>,
}

/// Side table bridging route records to live view instances, keyed by
/// record path and view-slot name. The rendering layer owns the write
/// side; the core only consumes callback lists on entry.
#[derive(Default)]
pub struct ViewRegistry {
    slots: Mutex<HashMap<String, HashMap<String, SlotEntry>>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_instance(
        &self,
        record_path: &str,
        slot: &str,
        instance: Arc<dyn ViewInstance>,
    ) {
        let mut slots = self.slots.lock();
        slots
            .entry(record_path.to_string())
            .or_default()
            .entry(slot.to_string())
            .or_default()
            .instance = Some(instance);
    }

    pub fn remove_instance(&self, record_path: &str, slot: &str) {
        let mut slots = self.slots.lock();
        if let Some(record_slots) = slots.get_mut(record_path)
            && let Some(entry) = record_slots.get_mut(slot)
        {
            entry.instance = None;
        }
    }

    /// Queues a one-shot callback delivered on the next entry of the
    /// record, once the slot has a live instance.
    pub fn push_entered_callback(&self, record_path: &str, slot: &str, callback: EnteredCallback) {
        let mut slots = self.slots.lock();
        slots
            .entry(record_path.to_string())
            .or_default()
            .entry(slot.to_string())
            .or_default()
            .entered_cbs
            .push(callback);
    }

    /// Removes and returns pending callbacks for every slot of
    /// `record_path` that has a live instance. Slots without an instance
    /// keep their callbacks for a later entry.
    fn take_entered(&self, record_path: &str) -> Vec<(Arc<dyn ViewInstance>, Vec<EnteredCallback>)> {
        let mut slots = self.slots.lock();
        let mut taken = Vec::new();
        if let Some(record_slots) = slots.get_mut(record_path) {
            for entry in record_slots.values_mut() {
                if entry.entered_cbs.is_empty() {
                    continue;
                }
                if let Some(instance) = entry.instance.as_ref() {
                    taken.push((Arc::clone(instance), std::mem::take(&mut entry.entered_cbs)));
                }
            }
        }
        taken
    }
}

/// Fires each matched record's pending entered callbacks, in
/// ancestor-to-descendant order. Callback lists are consumed before
/// invocation, so at most one delivery happens per slot per entry and a
/// repeat call is a no-op. Instances being torn down are skipped.
pub fn handle_route_entered(route: &Route, registry: &ViewRegistry) {
    for record in &route.matched {
        // collected under the lock, invoked outside it so a callback may
        // re-enter the registry
        for (instance, callbacks) in registry.take_entered(&record.path) {
            for callback in callbacks {
                if !instance.is_being_torn_down() {
                    callback(instance.as_ref());
                }
            }
        }
    }
}
