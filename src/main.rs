use anyhow::Result;
use callstats::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

/// Reads a session payload (JSON file), writes the session view JSON to stdout.
/// Logs go to stderr so stdout stays machine-readable.
fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(path) = args.get(1) else {
        anyhow::bail!("{}\nusage: {} <SESSION_JSON>", version::banner(), version::NAME);
    };

    let app_config = config::AppConfig::load_or_default()?;
    tracing::info!(version = version::VERSION, session = %path, "building session view");

    let payload = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("read {}: {}", path, e))?;
    let input = pipeline::SessionInput::from_json_str(&payload)?;
    let view = pipeline::build_session_view(&input, &app_config, &app_config.filters);

    tracing::info!(
        series = view.series.len(),
        tracks = view.timeline.tracks.len(),
        diagnostics = view.diagnostics.len(),
        "session view ready"
    );
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
