use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fitcoach_domain::prompt;

use crate::{CoachService, ServiceError, ServiceResult};

const PREVIEW_CHARS: usize = 80;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ListNotesRequest {
	pub limit: Option<u32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListItem {
	pub note_id: Uuid,
	pub text: String,
	pub preview: String,
	#[serde(with = "crate::time_serde")]
	pub created_at: time::OffsetDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListNotesResponse {
	pub items: Vec<ListItem>,
}

impl CoachService {
	/// Enumerates stored notes, newest first, capped by the configured
	/// page bound. An explicit zero limit is rejected rather than treated
	/// as "no limit".
	pub async fn list_notes(&self, req: ListNotesRequest) -> ServiceResult<ListNotesResponse> {
		let cap = match req.limit {
			Some(0) => {
				return Err(ServiceError::InvalidRequest {
					message: "limit must be greater than zero.".to_string(),
				});
			},
			Some(limit) => limit.min(self.cfg.retrieval.list_cap),
			None => self.cfg.retrieval.list_cap,
		};
		let records = self.notes.list(cap).await?;
		let items = records
			.into_iter()
			.map(|record| ListItem {
				note_id: record.note_id,
				preview: prompt::note_preview(&record.text, PREVIEW_CHARS),
				text: record.text,
				created_at: record.created_at,
			})
			.collect();

		Ok(ListNotesResponse { items })
	}
}
