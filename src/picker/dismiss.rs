//! Outside-click dismissal.
//!
//! Open popups register the screen region they own. A pointer-down anywhere
//! else is reported back to them so they can close. Registrations are
//! [`Subscription`] guards: dropping the guard (popup closed, widget torn
//! down) removes the listener, so nothing outlives an open popup.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;

/// Rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub row: u16,
    pub col: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn new(row: u16, col: u16, width: u16, height: u16) -> Self {
        Self {
            row,
            col,
            width,
            height,
        }
    }

    pub fn contains(&self, row: u16, col: u16) -> bool {
        let row = u32::from(row);
        let col = u32::from(col);
        row >= u32::from(self.row)
            && row < u32::from(self.row) + u32::from(self.height)
            && col >= u32::from(self.col)
            && col < u32::from(self.col) + u32::from(self.width)
    }
}

#[derive(Debug)]
struct Listener {
    owner: String,
    region: Region,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: IndexMap<u64, Listener>,
}

/// Shared pointer-down listener table. Cloning shares the same table.
#[derive(Debug, Clone, Default)]
pub struct PointerDownListeners {
    registry: Rc<RefCell<Registry>>,
}

impl PointerDownListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, owner: impl Into<String>, region: Region) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(
            id,
            Listener {
                owner: owner.into(),
                region,
            },
        );
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Owners whose region does not contain the pointer, in subscription order.
    pub fn dispatch(&self, row: u16, col: u16) -> Vec<String> {
        self.registry
            .borrow()
            .listeners
            .values()
            .filter(|l| !l.region.contains(row, col))
            .map(|l| l.owner.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Live registration; removed from the table on drop.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Follows the popup when its layout changes.
    pub fn set_region(&self, region: Region) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        if let Some(listener) = registry.borrow_mut().listeners.get_mut(&self.id) {
            listener.region = region;
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.shift_remove(&self.id);
        }
    }
}
