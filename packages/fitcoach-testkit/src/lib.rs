mod error;

pub use error::{Error, Result};

use std::{env, path::PathBuf, thread};

use qdrant_client::Qdrant;
use tokio::runtime::Builder;
use uuid::Uuid;

/// One uniquely-named Qdrant collection for a test run. Dropped collections
/// are deleted best-effort, on a dedicated runtime when the test did not
/// clean up itself.
pub struct TestCollection {
	name: String,
	cleaned: bool,
}
impl TestCollection {
	pub fn new(prefix: &str) -> Self {
		Self { name: format!("{prefix}_{}", Uuid::new_v4().simple()), cleaned: false }
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub async fn cleanup(mut self) -> Result<()> {
		self.cleanup_inner().await
	}

	async fn cleanup_inner(&mut self) -> Result<()> {
		if self.cleaned {
			return Ok(());
		}

		delete_collection(&self.name).await?;

		self.cleaned = true;

		Ok(())
	}
}
impl Drop for TestCollection {
	fn drop(&mut self) {
		if self.cleaned {
			return;
		}

		let name = self.name.clone();
		let cleanup_thread = thread::spawn(move || {
			let runtime = match Builder::new_current_thread().enable_all().build() {
				Ok(runtime) => runtime,
				Err(err) => {
					eprintln!("Test collection cleanup failed: {err}.");

					return;
				},
			};

			if let Err(err) = runtime.block_on(delete_collection(&name)) {
				eprintln!("Test collection cleanup failed: {err}.");
			}
		});
		let _ = cleanup_thread.join();
	}
}

pub fn env_qdrant_url() -> Option<String> {
	env::var("FITCOACH_QDRANT_URL").ok()
}

/// A fresh path for a test profile file under the system temp dir. The file
/// is not created; the store treats a missing file as an empty profile.
pub fn temp_profile_path(prefix: &str) -> PathBuf {
	let mut path = env::temp_dir();

	path.push(format!("{prefix}_{}.json", Uuid::new_v4().simple()));

	path
}

async fn delete_collection(name: &str) -> Result<()> {
	let Some(qdrant_url) = env_qdrant_url() else {
		eprintln!("Skipping Qdrant cleanup; set FITCOACH_QDRANT_URL to delete test collections.");

		return Ok(());
	};
	let client = Qdrant::from_url(&qdrant_url)
		.build()
		.map_err(|err| Error::Message(format!("Failed to build Qdrant client: {err}.")))?;

	client
		.delete_collection(name.to_string())
		.await
		.map_err(|err| Error::Message(format!("Failed to delete test collection: {err}.")))?;

	Ok(())
}
