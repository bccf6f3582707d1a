//! Swappable policy handle
//!
//! Readers clone the current `Arc` and price against that snapshot. A reload
//! replaces the whole `Arc` at once, so no call sees a half-updated policy.

use std::sync::Arc;

use curbside_common::PricingPolicy;
use parking_lot::RwLock;
use tracing::info;

#[derive(Debug)]
pub struct PolicyHandle {
    current: RwLock<Arc<PricingPolicy>>,
}

impl PolicyHandle {
    pub fn new(policy: PricingPolicy) -> Self {
        Self {
            current: RwLock::new(Arc::new(policy)),
        }
    }

    /// Current policy; stays valid across later replacements
    pub fn snapshot(&self) -> Arc<PricingPolicy> {
        Arc::clone(&self.current.read())
    }

    /// Install a new policy, returning the one it replaced
    pub fn replace(&self, policy: PricingPolicy) -> Arc<PricingPolicy> {
        let next = Arc::new(policy);
        let previous = std::mem::replace(&mut *self.current.write(), next);
        info!("Pricing policy replaced");
        previous
    }
}

impl Default for PolicyHandle {
    fn default() -> Self {
        Self::new(PricingPolicy::default())
    }
}
