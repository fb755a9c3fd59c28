use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CoachService, ServiceError, ServiceResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteNotesRequest {
	pub note_ids: Vec<Uuid>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteNotesResponse {
	pub deleted: usize,
}

impl CoachService {
	/// Deletes the given notes by id. Ids that are already absent are
	/// no-ops, so repeating a delete responds identically.
	pub async fn delete_notes(&self, req: DeleteNotesRequest) -> ServiceResult<DeleteNotesResponse> {
		if req.note_ids.is_empty() {
			return Err(ServiceError::InvalidRequest {
				message: "note_ids must be non-empty.".to_string(),
			});
		}

		self.notes.delete(&req.note_ids).await?;

		tracing::info!(count = req.note_ids.len(), "Notes deleted.");

		Ok(DeleteNotesResponse { deleted: req.note_ids.len() })
	}
}
