use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use golfshot_backend::errors::domain::DomainError;
use golfshot_backend::infra::{ScorecardImage, VisionClient};

/// Vision client that returns a fixed answer and counts calls.
pub struct StubVision {
    answer: Result<String, DomainError>,
    calls: AtomicUsize,
}

impl StubVision {
    pub fn answering(answer: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            answer: Ok(answer.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(error: DomainError) -> Arc<Self> {
        Arc::new(Self {
            answer: Err(error),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VisionClient for StubVision {
    async fn describe(&self, _image: &ScorecardImage, _prompt: &str) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }
}
