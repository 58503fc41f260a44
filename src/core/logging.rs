use std::str::FromStr;

use log::{Level, LevelFilter};

use crate::types::config::{colors_enabled, config};

/// Route `log` output through fern.
///
/// Info lines are the tool's normal console output and are printed bare on
/// stdout. Debug and trace also go to stdout, warnings and errors to stderr,
/// each prefixed with its level.
pub fn init_logging() {
    let level = LevelFilter::from_str(config().log().level()).unwrap_or(LevelFilter::Info);
    let colors = colors_enabled();

    let dispatch = fern::Dispatch::new()
        .format(move |out, message, record| match record.level() {
            Level::Info => out.finish(format_args!("{message}")),
            level => out.finish(format_args!("{} {message}", level_tag(level, colors))),
        })
        .level(level)
        .chain(
            fern::Dispatch::new()
                .filter(|meta| meta.level() > Level::Warn)
                .chain(std::io::stdout()),
        )
        .chain(
            fern::Dispatch::new()
                .filter(|meta| meta.level() <= Level::Warn)
                .chain(std::io::stderr()),
        );

    // A logger may already be installed (e.g. by tests); keep it
    let _ = dispatch.apply();
}

fn level_tag(level: Level, colors: bool) -> String {
    let tag = format!("[{level}]");
    if !colors {
        return tag;
    }
    let styled = console::style(tag).force_styling(true);
    match level {
        Level::Error => styled.red().bold().to_string(),
        Level::Warn => styled.yellow().to_string(),
        Level::Info => styled.to_string(),
        Level::Debug => styled.cyan().to_string(),
        Level::Trace => styled.dim().to_string(),
    }
}
