use std::sync::Arc;

use fitcoach_service::CoachService;
use fitcoach_storage::{notes::NotesStore, profile::ProfileStore};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<CoachService>,
}
impl AppState {
	pub async fn new(config: fitcoach_config::Config) -> color_eyre::Result<Self> {
		let profile = ProfileStore::new(&config.storage.profile);
		let notes = NotesStore::new(&config.storage.qdrant)?;

		notes.ensure_collection().await?;

		let service = CoachService::new(config, profile, notes);

		Ok(Self { service: Arc::new(service) })
	}

	pub fn with_service(service: CoachService) -> Self {
		Self { service: Arc::new(service) }
	}
}
