use async_trait::async_trait;
use itinerary_gateway::{Error, Result, llm::LlmClient};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum MockReply {
    /// Always return the same text
    Fixed(String),
    /// Return text derived from the prompt, so replies can be matched to requests
    Echo,
    Fail(String),
}

/// Mock LLM client for testing
#[derive(Debug)]
pub struct MockLlmClient {
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub reply: MockReply,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::with_reply(MockReply::Echo)
    }

    pub fn with_reply(reply: MockReply) -> Self {
        Self {
            prompts: Arc::new(Mutex::new(Vec::new())),
            reply,
        }
    }

    pub fn returning(text: &str) -> Self {
        Self::with_reply(MockReply::Fixed(text.to_string()))
    }

    pub fn failing(error: &str) -> Self {
        Self::with_reply(MockReply::Fail(error.to_string()))
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

pub fn echo_plan(prompt: &str) -> String {
    format!("PLAN[{}]", prompt)
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        // Yield so concurrent callers interleave
        tokio::task::yield_now().await;

        match &self.reply {
            MockReply::Fixed(text) => Ok(text.clone()),
            MockReply::Echo => Ok(echo_plan(prompt)),
            MockReply::Fail(error) => Err(Error::llm(error.clone())),
        }
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}
