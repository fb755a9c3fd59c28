use std::time::Duration;

use color_eyre::Result;
use reqwest::Client;
use serde_json::Value;

/// One web-search call (SerpAPI-style GET). The provider's result structure
/// is returned opaque; the workflow interpolates it into the generation
/// prompt without interpreting it.
pub async fn search(cfg: &fitcoach_config::WebSearchConfig, query: &str) -> Result<Value> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let res = client
		.get(url)
		.query(&[("q", query), ("engine", cfg.engine.as_str()), ("api_key", cfg.api_key.as_str())])
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	Ok(json)
}
