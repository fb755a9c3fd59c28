use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use fitcoach_storage::models::NoteRecord;

use crate::{CoachService, ServiceError, ServiceResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddNoteRequest {
	pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddNoteResponse {
	pub note_id: Uuid,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
}

impl CoachService {
	/// Stores one note with a snapshot of the current profile, a fresh id,
	/// and the creation timestamp. Notes are immutable once stored.
	pub async fn add_note(&self, req: AddNoteRequest) -> ServiceResult<AddNoteResponse> {
		let text = req.text.trim();

		if text.is_empty() {
			return Err(ServiceError::InvalidRequest {
				message: "Note text must be non-empty.".to_string(),
			});
		}

		let profile = self.profile.load()?;
		let vector = self.embed_one(text).await?;
		let record = NoteRecord {
			note_id: Uuid::new_v4(),
			text: text.to_string(),
			profile,
			created_at: OffsetDateTime::now_utc(),
		};

		self.notes.add(&record, vector).await?;

		tracing::info!(note_id = %record.note_id, "Note added.");

		Ok(AddNoteResponse { note_id: record.note_id, created_at: record.created_at })
	}
}
