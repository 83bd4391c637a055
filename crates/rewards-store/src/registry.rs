//! # Receipt Registry
//!
//! In-memory, process-lifetime store of registered receipts.
//!
//! ## Locking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Registry Operations                                  │
//! │                                                                         │
//! │  register(receipt)                     lookup(id)                       │
//! │       │                                    │                            │
//! │       ▼                                    ▼                            │
//! │  wrap in Arc (no lock)                read lock                         │
//! │       │                                    │                            │
//! │       ▼                                    ▼                            │
//! │  write lock ── insert ── unlock       clone Arc ── unlock               │
//! │       │                                    │                            │
//! │       ▼                                    ▼                            │
//! │  ReceiptId                            Arc<Receipt> (scored lock-free)   │
//! │                                                                         │
//! │  NOTE: Receipts are never mutated after insert, so a lookup may use     │
//! │        its Arc for as long as it likes without holding the lock.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A panic while a guard is held poisons the lock. Every critical section
//! is a single `HashMap` insert or get, so the map is never left half
//! written and the poison flag is cleared and ignored.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rewards_core::Receipt;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::id::ReceiptId;

/// Concurrency-safe map from [`ReceiptId`] to an immutable [`Receipt`].
///
/// Share it behind an `Arc`; every method takes `&self`.
#[derive(Debug, Default)]
pub struct ReceiptRegistry {
    receipts: RwLock<HashMap<ReceiptId, Arc<Receipt>>>,
}

impl ReceiptRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a receipt under a freshly generated identifier.
    ///
    /// Never fails. A generated identifier that is already taken is thrown
    /// away and another one drawn, so no entry is ever overwritten.
    pub fn register(&self, receipt: Receipt) -> ReceiptId {
        let receipt = Arc::new(receipt);

        let id = {
            let mut receipts = self.write();
            let mut id = ReceiptId::generate();
            while receipts.contains_key(&id) {
                debug!(%id, "Generated identifier already in use, drawing another");
                id = ReceiptId::generate();
            }
            receipts.insert(id, receipt);
            id
        };

        info!(%id, "Registered receipt");
        id
    }

    /// Returns the receipt registered under `id`.
    pub fn lookup(&self, id: &ReceiptId) -> StoreResult<Arc<Receipt>> {
        let found = self.read().get(id).cloned();

        found.ok_or_else(|| {
            debug!(%id, "No receipt registered under identifier");
            StoreError::not_found(id.to_string())
        })
    }

    /// Parses `id` and looks it up. Text that is not a UUID is `NotFound`.
    pub fn lookup_str(&self, id: &str) -> StoreResult<Arc<Receipt>> {
        let id: ReceiptId = id.parse()?;
        self.lookup(&id)
    }

    /// True if a receipt is registered under `id`.
    pub fn contains(&self, id: &ReceiptId) -> bool {
        self.read().contains_key(id)
    }

    /// Number of registered receipts.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<ReceiptId, Arc<Receipt>>> {
        self.receipts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<ReceiptId, Arc<Receipt>>> {
        self.receipts.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    use chrono::{NaiveDate, NaiveTime};
    use rewards_core::{Money, ReceiptItem};

    fn receipt(retailer: &str) -> Receipt {
        Receipt::new(
            retailer,
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(13, 1, 0).unwrap(),
            Money::from_cents(125),
            vec![ReceiptItem::new("Pepsi - 12-oz", Money::from_cents(125))],
        )
    }

    #[test]
    fn test_register_then_lookup_returns_same_receipt() {
        let registry = ReceiptRegistry::new();
        let original = receipt("Target");

        let id = registry.register(original.clone());
        let found = registry.lookup(&id).unwrap();

        assert_eq!(*found, original);
        assert!(registry.contains(&id));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_lookup_unknown_is_not_found_every_time() {
        let registry = ReceiptRegistry::new();
        registry.register(receipt("Target"));

        let unknown = ReceiptId::generate();
        for _ in 0..3 {
            assert_eq!(
                registry.lookup(&unknown),
                Err(StoreError::not_found(unknown.to_string()))
            );
        }
    }

    #[test]
    fn test_lookup_str() {
        let registry = ReceiptRegistry::new();
        let id = registry.register(receipt("Walgreens"));

        assert_eq!(registry.lookup_str(&id.to_string()).unwrap().retailer(), "Walgreens");
        assert!(matches!(
            registry.lookup_str("definitely-not-a-uuid"),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_lookup_str_rejects_other_spellings() {
        let registry = ReceiptRegistry::new();
        let id = registry.register(receipt("Walgreens"));
        let uuid = id.as_uuid();

        for alias in [
            id.to_string().to_uppercase(),
            uuid.simple().to_string(),
            uuid.urn().to_string(),
        ] {
            assert!(
                matches!(registry.lookup_str(&alias), Err(StoreError::NotFound { .. })),
                "{alias}"
            );
        }
        assert!(registry.lookup_str(&id.to_string()).is_ok());
    }

    #[test]
    fn test_ids_are_unique() {
        let registry = ReceiptRegistry::new();
        let ids: HashSet<_> = (0..1000).map(|_| registry.register(receipt("Target"))).collect();

        assert_eq!(ids.len(), 1000);
        assert_eq!(registry.len(), 1000);
    }

    #[test]
    fn test_each_id_maps_to_its_own_receipt() {
        let registry = ReceiptRegistry::new();
        let a = registry.register(receipt("Target"));
        let b = registry.register(receipt("Walgreens"));

        assert_eq!(registry.lookup(&a).unwrap().retailer(), "Target");
        assert_eq!(registry.lookup(&b).unwrap().retailer(), "Walgreens");
    }

    #[test]
    fn test_concurrent_register_and_lookup() {
        let registry = Arc::new(ReceiptRegistry::new());

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    (0..250)
                        .map(|n| {
                            let name = format!("Store {worker}-{n}");
                            let id = registry.register(receipt(&name));
                            // visible to the registering thread as soon as register returns
                            assert_eq!(registry.lookup(&id).unwrap().retailer(), name);
                            id
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<_> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        assert_eq!(ids.len(), 2000);
        assert_eq!(registry.len(), 2000);
        assert!(ids.iter().all(|id| registry.contains(id)));
    }

    #[test]
    fn test_empty_registry() {
        let registry = ReceiptRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
