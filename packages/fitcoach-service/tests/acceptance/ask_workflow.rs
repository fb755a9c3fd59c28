use std::sync::{
	Arc,
	atomic::{AtomicUsize, Ordering},
};

use serde_json::json;

use fitcoach_domain::routing::RouteDecision;
use fitcoach_service::{AddNoteRequest, AskRequest, Providers, UpdateProfileRequest};
use fitcoach_testkit::temp_profile_path;

use super::*;

#[tokio::test]
#[ignore = "Requires external Qdrant. Set FITCOACH_QDRANT_URL to run."]
async fn local_route_answers_without_searching_the_web() {
	let Some(qdrant_url) = test_qdrant_url() else {
		eprintln!("Skipping local_route_answers_without_searching_the_web; FITCOACH_QDRANT_URL is not set.");

		return;
	};
	let collection = test_collection();
	let profile_path = temp_profile_path("fitcoach_ask");
	let cfg = test_config(
		qdrant_url,
		collection.name().to_string(),
		profile_path.to_string_lossy().into_owned(),
	);
	let chat_calls = Arc::new(AtomicUsize::new(0));
	let web_calls = Arc::new(AtomicUsize::new(0));
	let providers = Providers::new(
		Arc::new(StubEmbedding { vector_dim: TEST_VECTOR_DIM }),
		Arc::new(ScriptedChat::new(
			&["NO_WEB", "  Aim for three runs a week and keep one of them easy.  "],
			chat_calls.clone(),
		)),
		Arc::new(SpyWebSearch { calls: web_calls.clone(), payload: json!({}) }),
	);
	let service = build_service(cfg, providers).await.unwrap();

	service
		.update_profile(UpdateProfileRequest {
			age: Some(30.),
			height: Some(175.),
			weight: Some(70.),
			goal: Some("run a sub-25 5k".to_string()),
		})
		.unwrap();
	service
		.add_note(AddNoteRequest { text: "Ran 5k in 28 minutes.".to_string() })
		.await
		.unwrap();

	let response = service
		.ask(AskRequest { question: "How often should I run each week?".to_string() })
		.await
		.unwrap();

	assert_eq!(response.route, RouteDecision::NoWeb);
	assert_eq!(response.answer, "Aim for three runs a week and keep one of them easy.");
	assert_eq!(chat_calls.load(Ordering::SeqCst), 2);
	assert_eq!(web_calls.load(Ordering::SeqCst), 0);

	collection.cleanup().await.unwrap();

	let _ = std::fs::remove_file(&profile_path);
}

#[tokio::test]
#[ignore = "Requires external Qdrant. Set FITCOACH_QDRANT_URL to run."]
async fn web_route_searches_exactly_once() {
	let Some(qdrant_url) = test_qdrant_url() else {
		eprintln!("Skipping web_route_searches_exactly_once; FITCOACH_QDRANT_URL is not set.");

		return;
	};
	let collection = test_collection();
	let profile_path = temp_profile_path("fitcoach_ask");
	let cfg = test_config(
		qdrant_url,
		collection.name().to_string(),
		profile_path.to_string_lossy().into_owned(),
	);
	let chat_calls = Arc::new(AtomicUsize::new(0));
	let web_calls = Arc::new(AtomicUsize::new(0));
	let providers = Providers::new(
		Arc::new(StubEmbedding { vector_dim: TEST_VECTOR_DIM }),
		Arc::new(ScriptedChat::new(
			&["USE_WEB", "The marathon is on October 12 this year."],
			chat_calls.clone(),
		)),
		Arc::new(SpyWebSearch {
			calls: web_calls.clone(),
			payload: json!({ "results": [{ "title": "City marathon 2026", "date": "October 12" }] }),
		}),
	);
	let service = build_service(cfg, providers).await.unwrap();
	let response = service
		.ask(AskRequest { question: "When is the city marathon this year?".to_string() })
		.await
		.unwrap();

	assert_eq!(response.route, RouteDecision::UseWeb);
	assert_eq!(response.answer, "The marathon is on October 12 this year.");
	assert_eq!(chat_calls.load(Ordering::SeqCst), 2);
	assert_eq!(web_calls.load(Ordering::SeqCst), 1);

	collection.cleanup().await.unwrap();

	let _ = std::fs::remove_file(&profile_path);
}

#[tokio::test]
#[ignore = "Requires external Qdrant. Set FITCOACH_QDRANT_URL to run."]
async fn unrecognized_routing_reply_stays_local() {
	let Some(qdrant_url) = test_qdrant_url() else {
		eprintln!("Skipping unrecognized_routing_reply_stays_local; FITCOACH_QDRANT_URL is not set.");

		return;
	};
	let collection = test_collection();
	let profile_path = temp_profile_path("fitcoach_ask");
	let cfg = test_config(
		qdrant_url,
		collection.name().to_string(),
		profile_path.to_string_lossy().into_owned(),
	);
	let web_calls = Arc::new(AtomicUsize::new(0));
	let providers = Providers::new(
		Arc::new(StubEmbedding { vector_dim: TEST_VECTOR_DIM }),
		Arc::new(ScriptedChat::new(
			&["I think you should USE_WEB for this one.", "Stick to your plan."],
			Arc::new(AtomicUsize::new(0)),
		)),
		Arc::new(SpyWebSearch { calls: web_calls.clone(), payload: json!({}) }),
	);
	let service = build_service(cfg, providers).await.unwrap();
	let response = service
		.ask(AskRequest { question: "Should I rest today?".to_string() })
		.await
		.unwrap();

	assert_eq!(response.route, RouteDecision::NoWeb);
	assert_eq!(web_calls.load(Ordering::SeqCst), 0);

	collection.cleanup().await.unwrap();

	let _ = std::fs::remove_file(&profile_path);
}
