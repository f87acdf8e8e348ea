//! `env_logger` setup for the interactive binary.

use std::io::Write;

use env_logger::{Builder, Env};

/// Install the global logger. `RUST_LOG` wins over `default_filter`.
///
/// Log lines go to stderr so they never interleave with the board on stdout.
pub fn init_logging(default_filter: &str) {
    let _ = Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .try_init();
}
