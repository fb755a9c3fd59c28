use serde::{Deserialize, Serialize};
use serde_json::Value;

use fitcoach_domain::{profile::Profile, prompt, routing::RouteDecision};
use fitcoach_providers::chat::user_message;

use crate::{CoachService, ServiceError, ServiceResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AskRequest {
	pub question: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AskResponse {
	pub answer: String,
	pub route: RouteDecision,
}

/// Transient per-request workflow state. Created when a question arrives,
/// discarded with the response; never persisted.
struct AskState {
	question: String,
	profile: Profile,
	notes: Vec<String>,
	web_result: Option<Value>,
}

impl CoachService {
	/// The answer workflow: load context, route, optionally search the web,
	/// generate. Single pass, no retries; at most two LLM calls, issued
	/// sequentially. Any provider or storage failure aborts the request.
	pub async fn ask(&self, req: AskRequest) -> ServiceResult<AskResponse> {
		let question = req.question.trim();

		if question.is_empty() {
			return Err(ServiceError::InvalidRequest {
				message: "Question must be non-empty.".to_string(),
			});
		}

		let mut state = self.load_context(question).await?;
		let route = self.route(&state).await?;

		if route.uses_web() {
			state.web_result = Some(self.web_search(&state.question).await?);
		}

		let answer = self.generate_answer(&state).await?;

		tracing::info!(route = ?route, "Answer generated.");

		Ok(AskResponse { answer, route })
	}

	async fn load_context(&self, question: &str) -> ServiceResult<AskState> {
		let profile = self.profile.load()?;
		let vector = self.embed_one(question).await?;
		let notes = self.notes.query(vector, self.cfg.retrieval.top_k).await?;

		tracing::debug!(note_count = notes.len(), "Context loaded.");

		Ok(AskState { question: question.to_string(), profile, notes, web_result: None })
	}

	async fn route(&self, state: &AskState) -> ServiceResult<RouteDecision> {
		let context = prompt::context_block(&state.profile, &state.notes, &state.question);
		let messages = [user_message(&prompt::router_prompt(&context))];
		let reply = self.providers.chat.complete(&self.cfg.providers.llm, &messages).await?;
		let decision = RouteDecision::parse(&reply);

		// A malformed reply routes to NoWeb per the token contract; the raw
		// reply stays observable in the logs.
		tracing::debug!(decision = ?decision, reply = reply.trim(), "Routing decision made.");

		Ok(decision)
	}

	async fn web_search(&self, question: &str) -> ServiceResult<Value> {
		let result =
			self.providers.web_search.search(&self.cfg.providers.web_search, question).await?;

		tracing::debug!("Web search completed.");

		Ok(result)
	}

	async fn generate_answer(&self, state: &AskState) -> ServiceResult<String> {
		let web_info = match state.web_result.as_ref() {
			Some(value) => serde_json::to_string(value).map_err(|err| ServiceError::Provider {
				message: format!("Failed to render web result: {err}."),
			})?,
			None => String::new(),
		};
		let prompt =
			prompt::answer_prompt(&state.profile, &state.notes, &web_info, &state.question);
		let messages = [user_message(&prompt)];
		let reply = self.providers.chat.complete(&self.cfg.providers.llm, &messages).await?;

		Ok(reply.trim().to_string())
	}
}
