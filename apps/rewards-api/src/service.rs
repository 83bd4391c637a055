//! Receipt service: the two operations the HTTP layer calls.
//!
//! The service composes validation, the registry and scoring. The registry
//! and the scoring engine never call each other.
//!
//! ```text
//! submit(payload)                       get_points(id)
//!   │                                     │
//!   ├─ Receipt::try_from(payload)         ├─ registry.lookup_str(id) ─► Arc<Receipt>
//!   └─ registry.register(receipt)         └─ score(&receipt)   (no lock held)
//! ```

use std::sync::Arc;

use rewards_core::{scoring, CoreResult, Receipt, ReceiptPayload};
use rewards_store::{ReceiptId, ReceiptRegistry};
use tracing::info;

use crate::error::ApiResult;

#[derive(Debug, Clone, Default)]
pub struct ReceiptService {
    registry: Arc<ReceiptRegistry>,
}

impl ReceiptService {
    pub fn new(registry: Arc<ReceiptRegistry>) -> Self {
        ReceiptService { registry }
    }

    /// Validates a submitted receipt and registers it.
    pub fn submit(&self, payload: &ReceiptPayload) -> ApiResult<ReceiptId> {
        let receipt = validate(payload)?;
        Ok(self.registry.register(receipt))
    }

    /// Scores the receipt registered under `id`.
    pub fn get_points(&self, id: &str) -> ApiResult<u64> {
        let receipt = self.registry.lookup_str(id)?;
        let points = scoring::score(&receipt);

        info!(%id, points, "Points calculated");
        Ok(points)
    }

    /// Number of receipts registered so far.
    pub fn receipt_count(&self) -> usize {
        self.registry.len()
    }
}

fn validate(payload: &ReceiptPayload) -> CoreResult<Receipt> {
    Ok(Receipt::try_from(payload)?)
}
