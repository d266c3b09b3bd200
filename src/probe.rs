//! Values that record their own construction and destruction

use std::{cell::Cell, rc::Rc};

#[derive(Debug, Default)]
pub struct Ledger {
    created: Cell<usize>,
    dropped: Cell<usize>,
    panic_on_clone: Cell<bool>,
}
impl Ledger {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn probe(self: &Rc<Self>, id: u32) -> Probe {
        self.created.set(self.created.get() + 1);
        Probe {
            id,
            ledger: Rc::clone(self),
        }
    }

    pub fn created(&self) -> usize {
        self.created.get()
    }

    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }

    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }

    pub fn set_panic_on_clone(&self, panic: bool) {
        self.panic_on_clone.set(panic);
    }
}

#[derive(Debug)]
pub struct Probe {
    id: u32,
    ledger: Rc<Ledger>,
}
impl Probe {
    pub fn id(&self) -> u32 {
        self.id
    }
}
impl Clone for Probe {
    fn clone(&self) -> Self {
        if self.ledger.panic_on_clone.get() {
            panic!("probe {} refused to clone", self.id);
        }
        self.ledger.probe(self.id)
    }
}
impl Drop for Probe {
    fn drop(&mut self) {
        self.ledger.dropped.set(self.ledger.dropped.get() + 1);
    }
}
impl PartialEq for Probe {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl PartialOrd for Probe {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.id.partial_cmp(&other.id)
    }
}

/// Panics when dropped
#[derive(Debug)]
pub struct Grenade;
impl Drop for Grenade {
    fn drop(&mut self) {
        panic!("grenade dropped");
    }
}
