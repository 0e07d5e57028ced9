// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::completion::CompletionClient;

pub type SharedState = Arc<AppState>;

#[derive(Debug)]
pub struct AppState {
    pub completion: CompletionClient,
}

impl AppState {
    pub fn new(completion: CompletionClient) -> Self {
        Self { completion }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(CompletionClient::new(
            config.api_key.clone(),
            config.base_url.clone(),
        ))
    }
}
