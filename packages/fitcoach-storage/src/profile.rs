use std::{
	fs, io,
	path::{Path, PathBuf},
};

use fitcoach_domain::profile::Profile;

use crate::{Error, Result};

/// Flat-file store for the singleton profile. Writes go through a temp file
/// in the same directory followed by a rename, so a crash mid-write never
/// leaves a torn file behind.
pub struct ProfileStore {
	path: PathBuf,
}
impl ProfileStore {
	pub fn new(cfg: &fitcoach_config::ProfileFile) -> Self {
		Self { path: PathBuf::from(&cfg.path) }
	}

	pub fn with_path(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// A file that does not exist yet is an uninitialized profile, not an
	/// error.
	pub fn load(&self) -> Result<Profile> {
		let raw = match fs::read_to_string(&self.path) {
			Ok(raw) => raw,
			Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Profile::default()),
			Err(err) => return Err(Error::ReadProfile { path: self.path.clone(), source: err }),
		};

		serde_json::from_str(&raw)
			.map_err(|err| Error::ParseProfile { path: self.path.clone(), source: err })
	}

	pub fn save(&self, profile: &Profile) -> Result<()> {
		let payload = serde_json::to_vec_pretty(profile).map_err(|err| Error::WriteProfile {
			path: self.path.clone(),
			source: io::Error::new(io::ErrorKind::InvalidData, err),
		})?;
		let tmp = self.temp_path();

		fs::write(&tmp, payload)
			.map_err(|err| Error::WriteProfile { path: tmp.clone(), source: err })?;

		if let Err(err) = fs::rename(&tmp, &self.path) {
			let _ = fs::remove_file(&tmp);

			return Err(Error::WriteProfile { path: self.path.clone(), source: err });
		}

		Ok(())
	}

	fn temp_path(&self) -> PathBuf {
		let file_name =
			self.path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_else(
				|| "profile.json".to_string(),
			);
		let parent = self.path.parent().unwrap_or_else(|| Path::new("."));

		parent.join(format!(".{file_name}.tmp-{}", uuid::Uuid::new_v4().simple()))
	}
}

#[cfg(test)]
mod tests {
	use std::env;

	use super::*;

	fn temp_store() -> ProfileStore {
		let mut path = env::temp_dir();

		path.push(format!("fitcoach_profile_test_{}.json", uuid::Uuid::new_v4().simple()));

		ProfileStore::with_path(path)
	}

	#[test]
	fn missing_file_loads_default() {
		let store = temp_store();
		let profile = store.load().expect("Expected default profile.");

		assert_eq!(profile, Profile::default());
	}

	#[test]
	fn save_then_load_round_trips() {
		let store = temp_store();
		let profile = Profile {
			age: Some(30.0),
			height: Some(175.0),
			weight: Some(70.0),
			goal: Some("lose weight".to_string()),
		};

		store.save(&profile).expect("Failed to save profile.");

		let restored = store.load().expect("Failed to load profile.");

		assert_eq!(restored, profile);

		fs::remove_file(store.path()).expect("Failed to remove test file.");
	}

	#[test]
	fn save_overwrites_wholesale() {
		let store = temp_store();
		let first = Profile { age: Some(30.0), ..Profile::default() };
		let second = Profile { goal: Some("run a marathon".to_string()), ..Profile::default() };

		store.save(&first).expect("Failed to save first profile.");
		store.save(&second).expect("Failed to save second profile.");

		let restored = store.load().expect("Failed to load profile.");

		assert_eq!(restored, second);
		assert_eq!(restored.age, None);

		fs::remove_file(store.path()).expect("Failed to remove test file.");
	}

	#[test]
	fn malformed_file_is_a_parse_error() {
		let store = temp_store();

		fs::write(store.path(), b"{ not json").expect("Failed to write test file.");

		let err = store.load().expect_err("Expected parse error.");

		assert!(matches!(err, Error::ParseProfile { .. }));

		fs::remove_file(store.path()).expect("Failed to remove test file.");
	}

	#[test]
	fn save_leaves_no_temp_files_behind() {
		let store = temp_store();

		store.save(&Profile::default()).expect("Failed to save profile.");

		let parent = store.path().parent().expect("Expected parent dir.").to_path_buf();
		let file_name = store.path().file_name().expect("Expected file name").to_string_lossy();
		let leftovers = fs::read_dir(parent)
			.expect("Failed to read temp dir.")
			.filter_map(|entry| entry.ok())
			.filter(|entry| {
				entry.file_name().to_string_lossy().starts_with(&format!(".{file_name}.tmp-"))
			})
			.count();

		assert_eq!(leftovers, 0);

		fs::remove_file(store.path()).expect("Failed to remove test file.");
	}
}
