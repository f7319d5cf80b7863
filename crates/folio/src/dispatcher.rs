//! Re-entry point for actions raised by middleware
//!
//! A middleware that wants another action handled (the config middleware
//! announcing `ConfigLoaded`, the boot sequence announcing completion, a
//! controller publishing a new frame) sends it here. The action goes back to
//! the worker and runs through the whole chain again, in order.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Cloneable handle onto the worker's action queue
///
/// Clones are moved into long-lived callbacks such as the boot sequence's
/// completion closure, so the handle must stay `Send`.
#[derive(Clone)]
pub struct Dispatcher {
    queue: Sender<Action>,
}

impl Dispatcher {
    pub fn new(queue: Sender<Action>) -> Self {
        Self { queue }
    }

    /// Queue an action behind everything already waiting for the worker
    ///
    /// Once the worker is gone the action is dropped and logged.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.queue.send(action) {
            log::error!("Dispatcher: worker queue closed, dropping {:?}", e.0);
        }
    }
}
