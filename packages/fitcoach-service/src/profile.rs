use serde::{Deserialize, Serialize};

use fitcoach_domain::profile::Profile;

use crate::{CoachService, ServiceResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
	pub age: Option<f64>,
	pub height: Option<f64>,
	pub weight: Option<f64>,
	pub goal: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
	pub profile: Profile,
}

impl CoachService {
	pub fn get_profile(&self) -> ServiceResult<ProfileResponse> {
		let profile = self.profile.load()?;

		Ok(ProfileResponse { profile })
	}

	/// Overwrites the singleton profile wholesale; there is no partial
	/// update and no history.
	pub fn update_profile(&self, req: UpdateProfileRequest) -> ServiceResult<ProfileResponse> {
		let goal = req.goal.and_then(|goal| {
			let trimmed = goal.trim();

			if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
		});
		let profile = Profile { age: req.age, height: req.height, weight: req.weight, goal };

		self.profile.save(&profile)?;

		tracing::info!("Profile updated.");

		Ok(ProfileResponse { profile })
	}
}
