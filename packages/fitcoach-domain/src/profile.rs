use serde::{Deserialize, Serialize};

/// The singleton user profile. Every field is optional; an uninitialized
/// profile is all-`None` and serializes with explicit nulls.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Profile {
	pub age: Option<f64>,
	pub height: Option<f64>,
	pub weight: Option<f64>,
	pub goal: Option<String>,
}

impl Profile {
	/// Renders one `key: value` line per field for prompt construction.
	/// Unset fields render as `none`.
	pub fn render_lines(&self) -> String {
		let mut out = String::new();

		push_number_line(&mut out, "age", self.age);
		push_number_line(&mut out, "height", self.height);
		push_number_line(&mut out, "weight", self.weight);
		out.push_str("goal: ");
		out.push_str(self.goal.as_deref().unwrap_or("none"));

		out
	}
}

fn push_number_line(out: &mut String, key: &str, value: Option<f64>) {
	out.push_str(key);
	out.push_str(": ");
	match value {
		// Render whole numbers without a trailing ".0" so prompts read naturally.
		Some(number) if number.fract() == 0.0 => out.push_str(&format!("{}", number as i64)),
		Some(number) => out.push_str(&number.to_string()),
		None => out.push_str("none"),
	}
	out.push('\n');
}
