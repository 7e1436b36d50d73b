use log::LevelFilter;

/// Workspace crate targets that receive log output by default.
const CRATE_TARGETS: &[&str] = &[
    "calsheet",
    "calsheet_grid",
    "calsheet_render_lopdf",
    "calsheet_style",
];

/// Maps the `-v` count to a level: none is warn, then info, debug, trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize logging from the CLI verbosity. `RUST_LOG` overrides the flag if set.
pub fn init(verbosity: u8) {
    let level = level_for(verbosity);
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    for target in CRATE_TARGETS {
        builder.filter_module(target, level);
    }
    builder.parse_env("RUST_LOG");
    builder.init();
}
