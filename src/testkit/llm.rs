//! Scripted [`Llm`] for tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{Error, GenerationError, Result};
use crate::port::outbound::llm::{CompletionRequest, Llm};

enum Reply {
    Text(String),
    Fail(String),
}

/// A backend that pops pre-loaded replies in order.
///
/// Once the queue is empty it keeps answering with the fallback reply, if
/// one was set via [`ScriptedLlm::always`], or fails otherwise.
pub struct ScriptedLlm {
    replies: Mutex<VecDeque<Reply>>,
    fallback: Option<String>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedLlm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            fallback: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A backend that returns `text` for every call.
    #[must_use]
    pub fn always(text: impl Into<String>) -> Self {
        Self {
            fallback: Some(text.into()),
            ..Self::new()
        }
    }

    /// Queue a successful reply.
    #[must_use]
    pub fn respond(self, text: impl Into<String>) -> Self {
        self.replies.lock().push_back(Reply::Text(text.into()));
        self
    }

    /// Queue a transport failure.
    #[must_use]
    pub fn fail(self, reason: impl Into<String>) -> Self {
        self.replies.lock().push_back(Reply::Fail(reason.into()));
        self
    }

    /// Number of `complete` calls so far.
    pub fn calls(&self) -> usize {
        self.requests.lock().len()
    }

    /// Every request received, in call order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().clone()
    }
}

impl Default for ScriptedLlm {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Llm for ScriptedLlm {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.requests.lock().push(request.clone());

        let reply = self.replies.lock().pop_front();
        match reply {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Fail(reason)) => Err(Error::Generation(GenerationError::Backend(reason))),
            None => match &self.fallback {
                Some(text) => Ok(text.clone()),
                None => Err(Error::Generation(GenerationError::Backend(
                    "no scripted reply left".into(),
                ))),
            },
        }
    }
}
