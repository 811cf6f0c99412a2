use std::io::Write;

/// Install the console logger.
///
/// Records are printed to stdout as `[LEVEL] message` with the level tag
/// colored (green for info, red for error). `RUST_LOG` overrides the default
/// `info` filter.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(buf, "{style}[{}]{style:#} {}", record.level(), record.args())
        })
        .init();
}
