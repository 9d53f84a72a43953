//! Events emitted by ledger and stability operations for subscribers.

use keel_types::{AccountId, Height};

/// Observable side effects of the public operations, delivered via the
/// [`EventBus`].
#[derive(Clone, Debug)]
pub enum TokenEvent {
    /// A transfer moved `amount` between accounts.
    Transfer {
        from: AccountId,
        to: AccountId,
        amount: u128,
    },
    /// A transfer carried a memo; emitted alongside its transfer event.
    Memo {
        from: AccountId,
        to: AccountId,
        memo: String,
    },
    /// The engine minted `amount` to the reserve.
    SupplyExpanded { amount: u128, height: Height },
    /// The engine burned `amount` from the reserve.
    SupplyContracted { amount: u128, height: Height },
}

/// Synchronous fan-out event bus.
///
/// Listeners run inline on the emitting call; keep handlers fast so an
/// operation is not stalled by its observers.
pub struct EventBus {
    listeners: Vec<Box<dyn Fn(&TokenEvent) + Send + Sync>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn Fn(&TokenEvent) + Send + Sync>) {
        self.listeners.push(listener);
    }

    pub fn emit(&self, event: &TokenEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
