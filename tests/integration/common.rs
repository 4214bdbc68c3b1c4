//! Scripted providers for the integration tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::oneshot;

use prompt_feed::{FetchCriteria, Prompt, PromptProvider};
use prompt_feed_llm::ProviderResult;

pub type Reply = ProviderResult<Vec<Prompt>>;

/// Answers each call with the next queued reply. A call with no queued
/// reply waits on a gate the test opens later.
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<oneshot::Receiver<Reply>>>,
    calls: AtomicUsize,
    criteria: Mutex<Vec<FetchCriteria>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
            criteria: Mutex::new(Vec::new()),
        }
    }

    /// Queue an immediate reply.
    pub fn reply(&self, reply: Reply) {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(reply);
        self.replies.lock().unwrap().push_back(rx);
    }

    /// Queue a reply that resolves when the returned sender fires.
    pub fn gate(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.lock().unwrap().push_back(rx);
        tx
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn criteria(&self) -> Vec<FetchCriteria> {
        self.criteria.lock().unwrap().clone()
    }

    pub async fn wait_for_calls(&self, n: usize) {
        while self.call_count() < n {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }
}

#[async_trait]
impl PromptProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn fetch_prompts(&self, criteria: &FetchCriteria) -> Reply {
        let next = self.replies.lock().unwrap().pop_front();
        self.criteria.lock().unwrap().push(*criteria);
        self.calls.fetch_add(1, Ordering::SeqCst);
        match next {
            Some(rx) => rx.await.unwrap_or_else(|_| Ok(Vec::new())),
            None => Ok(Vec::new()),
        }
    }
}

pub fn prompt(id: &str, text: &str, category: &str, model: &str, tags: &[&str]) -> Prompt {
    Prompt::new(id, text, category, model).with_tags(tags.iter().copied())
}
