use log::info;

use crate::types::AppResult;
use crate::types::config::config;

pub async fn execute(format: String) -> AppResult<()> {
    let effective_config = config().to_effective();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&effective_config)?);
        return Ok(());
    }

    // Table format
    info!("Effective Configuration:");
    info!("");
    info!("Global:");
    info!("  repo: {}", effective_config.repo());
    info!("  host: {}", effective_config.host());
    info!("  gh: {}", effective_config.gh());
    info!("  output: {}", effective_config.output());
    info!("  title: {}", effective_config.title());
    info!("  limit: {}", effective_config.limit());
    match effective_config.max_concurrency() {
        Some(max) => info!("  max_concurrency: {max}"),
        None => info!("  max_concurrency: unbounded"),
    }

    info!("");
    info!("Labels:");
    for label in effective_config.labels() {
        info!("  - {label}");
    }

    info!("");
    info!("States (precedence order):");
    for state in effective_config.states() {
        if state.bold() {
            info!("  - {} (bold)", state.name);
        } else {
            info!("  - {} (code: {})", state.name, state.code());
        }
    }

    info!("");
    info!("Issues:");
    let issues = effective_config.issues();
    info!("  enabled: {}", issues.enabled());
    info!("  code: {}", issues.code());

    info!("");
    info!("Log:");
    let log = effective_config.log();
    info!("  level: {}", log.level());
    match log.color() {
        Some(true) => info!("  color: on"),
        Some(false) => info!("  color: off"),
        None => info!("  color: auto"),
    }

    Ok(())
}
