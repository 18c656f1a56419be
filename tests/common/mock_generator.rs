//! Mock Text Generator for Testing
//!
//! Records every request and answers with a canned reply.

use async_trait::async_trait;
use hipsum::core::{GenerationRequest, TextGenerator};
use hipsum::{HipsumError, HipsumResult};
use std::sync::Mutex;
use std::time::Duration;

/// What the mock answers with
#[derive(Debug, Clone)]
pub enum Reply {
    Blocks(Vec<String>),
    InvalidResponse,
    Status(u16),
}

#[derive(Debug)]
pub struct MockGenerator {
    reply: Reply,
    /// Simulated network latency
    delay: Option<Duration>,
    /// All requests received
    pub requests: Mutex<Vec<GenerationRequest>>,
}

impl MockGenerator {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_blocks(blocks: &[&str]) -> Self {
        Self::new(Reply::Blocks(blocks.iter().map(|s| s.to_string()).collect()))
    }

    pub fn get_requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, request: &GenerationRequest) -> HipsumResult<Vec<String>> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.reply {
            Reply::Blocks(blocks) => Ok(blocks.clone()),
            Reply::InvalidResponse => Err(HipsumError::InvalidResponse),
            Reply::Status(status) => Err(HipsumError::Api {
                status: *status,
                message: "mock failure".to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
