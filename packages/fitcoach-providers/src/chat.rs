use std::time::Duration;

use color_eyre::{Result, eyre};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct ChatResponse {
	choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
	message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
	content: Option<String>,
}

/// One chat-completions call. The caller owns the prompt template and any
/// trimming of the returned text; both the routing and the generation step
/// go through here.
pub async fn complete(
	cfg: &fitcoach_config::LlmProviderConfig,
	messages: &[Value],
) -> Result<String> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": cfg.model,
		"temperature": cfg.temperature,
		"messages": messages,
	});
	let res = client
		.post(url)
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let response: ChatResponse = res.error_for_status()?.json().await?;

	first_content(response)
}

fn first_content(response: ChatResponse) -> Result<String> {
	response
		.choices
		.into_iter()
		.next()
		.and_then(|choice| choice.message.content)
		.ok_or_else(|| eyre::eyre!("Chat response is missing message content."))
}

pub fn user_message(prompt: &str) -> Value {
	serde_json::json!({ "role": "user", "content": prompt })
}
