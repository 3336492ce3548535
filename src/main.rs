use amenable::{cli::parse_args, commands, config::Config, logging::init_tracing};
use anyhow::{Context, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    let config =
        Config::load_or_default(args.config_path.as_deref()).context("failed to load config")?;
    let _logging_guard = init_tracing(&config.logging)?;

    let output = commands::run(&args.command).await?;
    let rendered = if config.output.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .context("failed to render output")?;

    println!("{rendered}");
    Ok(())
}
