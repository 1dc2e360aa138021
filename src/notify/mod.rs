// Notification sinks: best-effort delivery of a persisted inquiry to
// external channels. Sink failures are logged and swallowed by the caller;
// they never abort the pipeline.
pub mod email;
pub mod sheets;

pub use email::EmailNotifier;
pub use sheets::SheetsNotifier;

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use log::{error, info};

use crate::data_connector::Inquiry;

/// Error type for notification deliveries
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Signing error: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// A delivery target for one inquiry. Each attempt is made exactly once;
/// there is no retry or redelivery queue.
#[async_trait]
pub trait Notifier: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    async fn notify(&self, inquiry: &Inquiry) -> Result<(), NotificationError>;
}

/// Shared pointer alias for notification sinks
pub type SharedNotifier = Arc<dyn Notifier>;

/// Deliver one inquiry to every sink concurrently. Sinks are independent:
/// each failure is logged and swallowed without affecting the others.
/// Returns the names of the sinks that succeeded.
pub async fn notify_all(notifiers: &[SharedNotifier], inquiry: &Inquiry) -> Vec<&'static str> {
    let tasks = notifiers.iter().map(|n| async move {
        let outcome = n.notify(inquiry).await;
        (n.name(), outcome)
    });
    let mut delivered = Vec::new();
    for (name, outcome) in join_all(tasks).await {
        match outcome {
            Ok(()) => {
                info!("Notification sent via {} for inquiry {}", name, inquiry.id);
                delivered.push(name);
            }
            Err(e) => {
                error!("Notification via {} failed for inquiry {}: {}", name, inquiry.id, e);
            }
        }
    }
    delivered
}
