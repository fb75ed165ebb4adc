/// Simulated style transfer
///
/// No image is transformed here. A job only waits out a fixed delay so the
/// UI can show its processing state, then a receipt summarises what the
/// user asked for.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// A transfer the user started with the Apply button
#[derive(Debug, Clone, PartialEq)]
pub struct TransferJob {
    /// Sequential within a session, starting at 1
    pub id: u64,
    pub product_id: String,
    pub style_id: String,
    pub started_at: DateTime<Utc>,
}

/// Summary of a finished transfer
#[derive(Debug, Clone, PartialEq)]
pub struct TransferReceipt {
    pub job_id: u64,
    pub product_id: String,
    pub style_id: String,
    /// The pre-rendered result, None when the catalog has no mapping
    pub image_url: Option<String>,
    pub completed_at: DateTime<Utc>,
}

impl TransferJob {
    pub fn new(id: u64, product_id: &str, style_id: &str) -> Self {
        Self {
            id,
            product_id: product_id.to_string(),
            style_id: style_id.to_string(),
            started_at: Utc::now(),
        }
    }

    /// Build the receipt for this job once its delay has elapsed
    pub fn complete(self, image_url: Option<String>) -> TransferReceipt {
        TransferReceipt {
            job_id: self.id,
            product_id: self.product_id,
            style_id: self.style_id,
            image_url,
            completed_at: Utc::now(),
        }
    }
}

/// Wait out the processing delay and hand the job back.
///
/// There is no cancellation; every started job eventually completes.
pub async fn simulate(job: TransferJob, delay: Duration) -> TransferJob {
    tokio::time::sleep(delay).await;
    job
}
