use crate::config::GenerationConfig;
use crate::db::KnowledgeStore;
use crate::llm::{ChatMessage, ChatModel, ChatRequest};

use super::context::compose_context;
use super::emergency::is_emergency;
use super::location::extract_city;
use super::prompt;
use super::symptoms::extract_symptoms;

/// Turns one free-text complaint into one reply.
///
/// This is the direct, blocking form; `surface::ResponseHarness` wraps it
/// for concurrent use. Every path returns a displayable string — failures
/// at this boundary become inline reply text, never errors.
pub struct ResponseOrchestrator<M: ChatModel> {
    store: KnowledgeStore,
    model: M,
    config: GenerationConfig,
}

impl<M: ChatModel> ResponseOrchestrator<M> {
    pub fn new(store: KnowledgeStore, model: M, config: GenerationConfig) -> Self {
        Self {
            store,
            model,
            config,
        }
    }

    pub fn respond(&self, text: &str) -> String {
        let text = text.trim();
        if text.is_empty() {
            return prompt::EMPTY_INPUT_PROMPT.to_string();
        }

        if is_emergency(text) {
            tracing::info!("Emergency phrasing detected, short-circuiting");
            return prompt::EMERGENCY_MESSAGE.to_string();
        }

        let city = extract_city(text);
        let known_names = self.store.symptom_names().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Symptom name lookup failed, continuing without matches");
            Vec::new()
        });
        let symptoms = extract_symptoms(text, &known_names);

        let user_prompt = if symptoms.is_empty() {
            prompt::build_generic_prompt(text)
        } else {
            let context = compose_context(&self.store, &symptoms, city.as_deref());
            prompt::build_context_prompt(text, &context)
        };

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(prompt::SYSTEM_PERSONA),
                ChatMessage::user(user_prompt),
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        match self.model.complete(&request) {
            Ok(reply) => reply.trim().to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "Generation call failed, replying inline");
                prompt::service_failure_reply(&e)
            }
        }
    }
}
