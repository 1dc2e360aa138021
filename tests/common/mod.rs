// Shared fixtures for the integration tests
#![allow(dead_code)]

pub mod mock_upstream;

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use parking_lot::Mutex;

use brightloop_gateway::{
    app_state::AppState,
    chat::ChatAssistant,
    config::GatewayConfig,
    data_connector::{
        Inquiry, InquiryResult, InquiryStorage, InquiryStorageError, NewInquiry,
        SharedInquiryStorage,
    },
    inquiry::InquiryPipeline,
    notify::{NotificationError, Notifier, SharedNotifier},
};

/// Notifier fake that records every inquiry it is asked to deliver.
pub struct RecordingNotifier {
    name: &'static str,
    fail: bool,
    seen: Mutex<Vec<Inquiry>>,
}

impl RecordingNotifier {
    pub fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            fail: false,
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            fail: true,
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn count(&self) -> usize {
        self.seen.lock().len()
    }

    pub fn seen(&self) -> Vec<Inquiry> {
        self.seen.lock().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn notify(&self, inquiry: &Inquiry) -> Result<(), NotificationError> {
        self.seen.lock().push(inquiry.clone());
        if self.fail {
            Err(NotificationError::Api {
                status: 500,
                message: "sink down".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

/// Storage stub whose insert always fails, for persistence-failure paths.
pub struct FailingStorage;

#[async_trait]
impl InquiryStorage for FailingStorage {
    async fn insert(&self, _input: NewInquiry) -> InquiryResult<Inquiry> {
        Err(InquiryStorageError::StorageError(
            "connection refused".to_string(),
        ))
    }
}

pub fn test_config() -> GatewayConfig {
    GatewayConfig {
        environment: "test".to_string(),
        ..GatewayConfig::default()
    }
}

/// Assemble handler state from parts; tests swap in fakes per case.
pub fn build_state(
    config: GatewayConfig,
    storage: SharedInquiryStorage,
    notifiers: Vec<SharedNotifier>,
    assistant: ChatAssistant,
) -> web::Data<AppState> {
    web::Data::new(AppState {
        config,
        pipeline: InquiryPipeline::new(storage, notifiers),
        assistant,
    })
}

/// State with a degraded-mode assistant, for tests that never touch chat
/// or that only need canned replies.
pub fn degraded_state(
    config: GatewayConfig,
    storage: SharedInquiryStorage,
    notifiers: Vec<SharedNotifier>,
) -> web::Data<AppState> {
    let assistant = ChatAssistant::new(reqwest::Client::new(), config.gemini.clone());
    build_state(config, storage, notifiers, assistant)
}
