use time::OffsetDateTime;
use uuid::Uuid;

use fitcoach_domain::profile::Profile;

/// One stored note. Immutable once written; the store only ever adds or
/// deletes whole records.
#[derive(Clone, Debug, PartialEq)]
pub struct NoteRecord {
	pub note_id: Uuid,
	pub text: String,
	/// Snapshot of the profile at the moment the note was added.
	pub profile: Profile,
	pub created_at: OffsetDateTime,
}
