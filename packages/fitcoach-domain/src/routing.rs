use serde::{Deserialize, Serialize};

pub const USE_WEB_TOKEN: &str = "USE_WEB";
pub const NO_WEB_TOKEN: &str = "NO_WEB";

/// Outcome of the routing step. A tagged variant rather than a bool so a
/// future outcome (for example "insufficient data") can be added without
/// touching the token contract.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDecision {
	UseWeb,
	NoWeb,
}

impl RouteDecision {
	/// `UseWeb` iff the trimmed reply is exactly the `USE_WEB` literal.
	/// Anything else, including partial matches and extra words, routes to
	/// `NoWeb`. Intentionally strict; there is no fuzzy matching and no
	/// retry on ambiguous output.
	pub fn parse(reply: &str) -> Self {
		if reply.trim() == USE_WEB_TOKEN { Self::UseWeb } else { Self::NoWeb }
	}

	pub fn uses_web(self) -> bool {
		matches!(self, Self::UseWeb)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn exact_token_routes_to_web() {
		assert_eq!(RouteDecision::parse("USE_WEB"), RouteDecision::UseWeb);
		assert_eq!(RouteDecision::parse("  USE_WEB\n"), RouteDecision::UseWeb);
	}

	#[test]
	fn anything_else_routes_to_no_web() {
		for reply in ["", "NO_WEB", "use_web", "USE_WEB.", "Sure, USE_WEB", "USE WEB", "USE_WEB!"] {
			assert_eq!(RouteDecision::parse(reply), RouteDecision::NoWeb, "reply: {reply:?}");
		}
	}

	#[test]
	fn serializes_snake_case() {
		let json = serde_json::to_string(&RouteDecision::UseWeb).expect("Failed to serialize.");

		assert_eq!(json, "\"use_web\"");
	}
}
