use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = fitcoach_api::Args::parse();

	fitcoach_api::run(args).await
}
