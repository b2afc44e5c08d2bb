//! stderr logging for the binary.
//!
//! Library code only emits `tracing` events; this installs the subscriber.
//! The level comes from `-v` alone so the tool never reads the environment.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::FmtSubscriber;

pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

pub fn init(verbosity: u8) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
