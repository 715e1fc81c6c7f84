//! Common test utilities for integration tests.

#![allow(dead_code)]

pub mod harness;

use std::cell::RefCell;
use std::rc::Rc;

/// Tracks renderer calls made by the gestures.
#[derive(Default, Clone)]
pub struct CallbackTracker {
    /// Every `set_view_interaction(enabled)` call, in order
    pub view_interaction: Rc<RefCell<Vec<bool>>>,
    /// Count of refresh calls
    pub refreshes: Rc<RefCell<usize>>,
}

impl CallbackTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last view interaction state requested, `None` if never toggled.
    pub fn view_interaction_enabled(&self) -> Option<bool> {
        self.view_interaction.borrow().last().copied()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.view_interaction.borrow_mut().clear();
        *self.refreshes.borrow_mut() = 0;
    }
}
