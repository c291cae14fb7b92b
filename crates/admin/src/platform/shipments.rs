//! Shipment endpoints.
//!
//! The platform is the authority on shipment transitions; the panel checks
//! the transition table before calling so it never offers an action the
//! platform would refuse, but a concurrent admin can still lose the race and
//! get the platform's rejection message back.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use tidemark_core::{OrderId, ShipmentId, ShipmentStatus};

use super::PlatformError;
use super::client::PlatformClient;

/// A shipment as mirrored from the platform.
#[derive(Debug, Clone, Deserialize)]
pub struct Shipment {
    /// Platform shipment ID.
    pub id: ShipmentId,
    /// Carrier tracking number.
    pub tracking_number: String,
    /// Current lifecycle status.
    pub status: ShipmentStatus,
    /// Order this shipment fulfils.
    pub order_id: OrderId,
    /// Carrier name, when assigned.
    #[serde(default)]
    pub carrier: Option<String>,
    /// Last update timestamp (RFC 3339).
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body for `PUT /api/admin/shipment/{id}/status`.
#[derive(Debug, Serialize)]
struct ShipmentStatusUpdate {
    status: ShipmentStatus,
}

impl PlatformClient {
    /// Fetch the full shipment collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, token))]
    pub async fn get_shipments(&self, token: &str) -> Result<Vec<Shipment>, PlatformError> {
        self.get(token, "/api/admin/shipment/all").await
    }

    /// Move a shipment to a new status.
    ///
    /// One attempt per call; the platform re-validates the transition and
    /// its rejection message is surfaced verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the platform rejects
    /// the transition.
    #[instrument(skip(self, token), fields(shipment_id = %id, status = %status))]
    pub async fn update_shipment_status(
        &self,
        token: &str,
        id: ShipmentId,
        status: ShipmentStatus,
    ) -> Result<(), PlatformError> {
        let body = ShipmentStatusUpdate { status };
        self.put_ack(token, &format!("/api/admin/shipment/{id}/status"), &body)
            .await
    }
}
