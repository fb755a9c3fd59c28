use std::sync::{Arc, atomic::AtomicUsize};

use serde_json::json;

use fitcoach_service::{AddNoteRequest, DeleteNotesRequest, ListNotesRequest, Providers};
use fitcoach_testkit::temp_profile_path;

use super::*;

fn test_providers() -> Providers {
	let web_calls = Arc::new(AtomicUsize::new(0));

	Providers::new(
		Arc::new(StubEmbedding { vector_dim: TEST_VECTOR_DIM }),
		Arc::new(ScriptedChat::new(&[], Arc::new(AtomicUsize::new(0)))),
		Arc::new(SpyWebSearch { calls: web_calls, payload: json!({}) }),
	)
}

#[tokio::test]
#[ignore = "Requires external Qdrant. Set FITCOACH_QDRANT_URL to run."]
async fn added_note_appears_in_listing() {
	let Some(qdrant_url) = test_qdrant_url() else {
		eprintln!("Skipping added_note_appears_in_listing; FITCOACH_QDRANT_URL is not set.");

		return;
	};
	let collection = test_collection();
	let profile_path = temp_profile_path("fitcoach_lifecycle");
	let cfg = test_config(
		qdrant_url,
		collection.name().to_string(),
		profile_path.to_string_lossy().into_owned(),
	);
	let service = build_service(cfg, test_providers()).await.unwrap();
	let added = service
		.add_note(AddNoteRequest { text: "Ran 5k in 28 minutes, felt strong.".to_string() })
		.await
		.unwrap();
	let listed = service.list_notes(ListNotesRequest { limit: None }).await.unwrap();

	assert_eq!(listed.items.len(), 1);
	assert_eq!(listed.items[0].note_id, added.note_id);
	assert_eq!(listed.items[0].text, "Ran 5k in 28 minutes, felt strong.");

	collection.cleanup().await.unwrap();

	let _ = std::fs::remove_file(&profile_path);
}

#[tokio::test]
#[ignore = "Requires external Qdrant. Set FITCOACH_QDRANT_URL to run."]
async fn delete_removes_note_and_repeating_is_idempotent() {
	let Some(qdrant_url) = test_qdrant_url() else {
		eprintln!(
			"Skipping delete_removes_note_and_repeating_is_idempotent; FITCOACH_QDRANT_URL is not set."
		);

		return;
	};
	let collection = test_collection();
	let profile_path = temp_profile_path("fitcoach_lifecycle");
	let cfg = test_config(
		qdrant_url,
		collection.name().to_string(),
		profile_path.to_string_lossy().into_owned(),
	);
	let service = build_service(cfg, test_providers()).await.unwrap();
	let added = service
		.add_note(AddNoteRequest { text: "Bench pressed 60kg for 5 reps.".to_string() })
		.await
		.unwrap();
	let deleted = service
		.delete_notes(DeleteNotesRequest { note_ids: vec![added.note_id] })
		.await
		.unwrap();

	assert_eq!(deleted.deleted, 1);

	let listed = service.list_notes(ListNotesRequest { limit: None }).await.unwrap();

	assert!(listed.items.is_empty());

	// Deleting an id that is already gone must respond identically.
	let repeated = service
		.delete_notes(DeleteNotesRequest { note_ids: vec![added.note_id] })
		.await
		.unwrap();

	assert_eq!(repeated.deleted, 1);

	let listed = service.list_notes(ListNotesRequest { limit: None }).await.unwrap();

	assert!(listed.items.is_empty());

	collection.cleanup().await.unwrap();

	let _ = std::fs::remove_file(&profile_path);
}

#[tokio::test]
#[ignore = "Requires external Qdrant. Set FITCOACH_QDRANT_URL to run."]
async fn listing_is_newest_first_and_capped() {
	let Some(qdrant_url) = test_qdrant_url() else {
		eprintln!("Skipping listing_is_newest_first_and_capped; FITCOACH_QDRANT_URL is not set.");

		return;
	};
	let collection = test_collection();
	let profile_path = temp_profile_path("fitcoach_lifecycle");
	let cfg = test_config(
		qdrant_url,
		collection.name().to_string(),
		profile_path.to_string_lossy().into_owned(),
	);
	let service = build_service(cfg, test_providers()).await.unwrap();

	for text in ["first note", "second note", "third note"] {
		service.add_note(AddNoteRequest { text: text.to_string() }).await.unwrap();
	}

	let listed = service.list_notes(ListNotesRequest { limit: Some(2) }).await.unwrap();

	// The cap must keep the newest notes, not an arbitrary storage-ordered
	// subset.
	assert_eq!(listed.items.len(), 2);
	assert_eq!(listed.items[0].text, "third note");
	assert_eq!(listed.items[1].text, "second note");

	collection.cleanup().await.unwrap();

	let _ = std::fs::remove_file(&profile_path);
}
