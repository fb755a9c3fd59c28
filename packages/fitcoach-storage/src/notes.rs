use std::collections::HashMap;

use qdrant_client::{
	client::Payload,
	qdrant::{
		CreateCollectionBuilder, DeletePointsBuilder, Distance, PointId, PointStruct,
		PointsIdsList, Query, QueryPointsBuilder, ScrollPointsBuilder, UpsertPointsBuilder, Value,
		VectorParamsBuilder, value::Kind,
	},
};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use uuid::Uuid;

use fitcoach_domain::profile::Profile;

use crate::{Error, Result, models::NoteRecord};

const SCROLL_PAGE_SIZE: u32 = 64;

/// Qdrant-backed note store. The point id is the note id; the payload
/// carries the note text plus the owner profile snapshot, the Rfc3339
/// timestamp, and the note id.
pub struct NotesStore {
	pub client: qdrant_client::Qdrant,
	pub collection: String,
	pub vector_dim: u32,
}
impl NotesStore {
	pub fn new(cfg: &fitcoach_config::Qdrant) -> Result<Self> {
		let client = qdrant_client::Qdrant::from_url(&cfg.url).build()?;

		Ok(Self { client, collection: cfg.collection.clone(), vector_dim: cfg.vector_dim })
	}

	pub async fn ensure_collection(&self) -> Result<()> {
		if self.client.collection_exists(self.collection.clone()).await? {
			return Ok(());
		}

		let builder = CreateCollectionBuilder::new(self.collection.clone())
			.vectors_config(VectorParamsBuilder::new(self.vector_dim.into(), Distance::Cosine));

		self.client.create_collection(builder).await?;

		Ok(())
	}

	pub async fn add(&self, record: &NoteRecord, vector: Vec<f32>) -> Result<()> {
		self.check_dim(&vector)?;

		let payload = Payload::from(note_payload(record)?);
		let point = PointStruct::new(record.note_id.to_string(), vector, payload);
		let upsert = UpsertPointsBuilder::new(self.collection.clone(), vec![point]).wait(true);

		self.client.upsert_points(upsert).await?;

		Ok(())
	}

	/// Top-k nearest note texts, most similar first. No relevance threshold;
	/// low-relevance matches can be returned.
	pub async fn query(&self, vector: Vec<f32>, top_k: u32) -> Result<Vec<String>> {
		self.check_dim(&vector)?;

		let search = QueryPointsBuilder::new(self.collection.clone())
			.query(Query::new_nearest(vector))
			.limit(top_k as u64)
			.with_payload(true);
		let response = self.client.query(search).await?;
		let mut texts = Vec::with_capacity(response.result.len());

		for point in response.result {
			texts.push(payload_text(&point.payload)?);
		}

		Ok(texts)
	}

	/// True enumeration via scroll pagination. Scroll order is point-id
	/// order, uncorrelated with `created_at`, so the whole collection is
	/// scrolled before sorting and truncating to the newest `cap` records.
	pub async fn list(&self, cap: u32) -> Result<Vec<NoteRecord>> {
		let mut records = Vec::new();
		let mut offset: Option<PointId> = None;

		loop {
			let mut builder = ScrollPointsBuilder::new(self.collection.clone())
				.limit(SCROLL_PAGE_SIZE)
				.with_payload(true);

			if let Some(offset) = offset.take() {
				builder = builder.offset(offset);
			}

			let response = self.client.scroll(builder).await?;

			if response.result.is_empty() {
				break;
			}

			for point in response.result {
				records.push(decode_note(&point.payload)?);
			}

			match response.next_page_offset {
				Some(next) => offset = Some(next),
				None => break,
			}
		}

		Ok(newest_first(records, cap))
	}

	/// Deleting an id that is not present is a no-op.
	pub async fn delete(&self, note_ids: &[Uuid]) -> Result<()> {
		if note_ids.is_empty() {
			return Ok(());
		}

		let ids: Vec<PointId> = note_ids.iter().map(|id| id.to_string().into()).collect();
		let delete = DeletePointsBuilder::new(self.collection.clone())
			.points(PointsIdsList { ids })
			.wait(true);

		self.client.delete_points(delete).await?;

		Ok(())
	}

	fn check_dim(&self, vector: &[f32]) -> Result<()> {
		if vector.len() != self.vector_dim as usize {
			return Err(Error::InvalidArgument(format!(
				"Vector dimension {} does not match configured vector_dim {}.",
				vector.len(),
				self.vector_dim
			)));
		}

		Ok(())
	}
}

fn newest_first(mut records: Vec<NoteRecord>, cap: u32) -> Vec<NoteRecord> {
	records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
	records.truncate(cap as usize);

	records
}

fn note_payload(record: &NoteRecord) -> Result<HashMap<String, Value>> {
	let created_at = record
		.created_at
		.format(&Rfc3339)
		.map_err(|_| Error::Payload("Failed to format timestamp.".to_string()))?;
	let mut payload = HashMap::new();

	payload.insert("text".to_string(), Value::from(record.text.clone()));
	payload.insert("note_id".to_string(), Value::from(record.note_id.to_string()));
	payload.insert("timestamp".to_string(), Value::from(created_at));
	payload.insert("age".to_string(), optional_number(record.profile.age));
	payload.insert("height".to_string(), optional_number(record.profile.height));
	payload.insert("weight".to_string(), optional_number(record.profile.weight));
	payload.insert(
		"goal".to_string(),
		match record.profile.goal.as_ref() {
			Some(goal) => Value::from(goal.clone()),
			None => Value::from(serde_json::Value::Null),
		},
	);

	Ok(payload)
}

fn optional_number(value: Option<f64>) -> Value {
	match value {
		Some(number) => Value::from(number),
		None => Value::from(serde_json::Value::Null),
	}
}

fn decode_note(payload: &HashMap<String, Value>) -> Result<NoteRecord> {
	let text = payload_text(payload)?;
	let note_id = payload_str(payload, "note_id")
		.and_then(|raw| Uuid::parse_str(&raw).ok())
		.ok_or_else(|| Error::Payload("Point payload is missing a valid note_id.".to_string()))?;
	let created_at = payload_str(payload, "timestamp")
		.and_then(|raw| OffsetDateTime::parse(&raw, &Rfc3339).ok())
		.ok_or_else(|| Error::Payload("Point payload is missing a valid timestamp.".to_string()))?;
	let profile = Profile {
		age: payload_f64(payload, "age"),
		height: payload_f64(payload, "height"),
		weight: payload_f64(payload, "weight"),
		goal: payload_str(payload, "goal"),
	};

	Ok(NoteRecord { note_id, text, profile, created_at })
}

fn payload_text(payload: &HashMap<String, Value>) -> Result<String> {
	payload_str(payload, "text")
		.ok_or_else(|| Error::Payload("Point payload is missing note text.".to_string()))
}

fn payload_str(payload: &HashMap<String, Value>, key: &str) -> Option<String> {
	match payload.get(key).and_then(|value| value.kind.as_ref()) {
		Some(Kind::StringValue(text)) => Some(text.clone()),
		_ => None,
	}
}

fn payload_f64(payload: &HashMap<String, Value>, key: &str) -> Option<f64> {
	match payload.get(key).and_then(|value| value.kind.as_ref()) {
		Some(Kind::DoubleValue(value)) => Some(*value),
		Some(Kind::IntegerValue(value)) => Some(*value as f64),
		_ => None,
	}
}
