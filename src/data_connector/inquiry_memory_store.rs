use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use super::inquiries::{Inquiry, InquiryStorage, NewInquiry, Result};

/// In-process inquiry storage used when no database is configured and in
/// tests. Rows live for the process lifetime.
#[derive(Default, Clone)]
pub struct MemoryInquiryStorage {
    inner: Arc<RwLock<Vec<Inquiry>>>,
}

impl MemoryInquiryStorage {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn count(&self) -> usize {
        self.inner.read().len()
    }

    pub fn all(&self) -> Vec<Inquiry> {
        self.inner.read().clone()
    }
}

#[async_trait]
impl InquiryStorage for MemoryInquiryStorage {
    async fn insert(&self, input: NewInquiry) -> Result<Inquiry> {
        let mut rows = self.inner.write();
        let inquiry = Inquiry::from_parts(rows.len() as i64 + 1, Utc::now(), input);
        rows.push(inquiry.clone());
        Ok(inquiry)
    }
}
