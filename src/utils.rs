use std::{env, io::Write};

use chrono::Utc;
use env_logger::Builder;
use log::LevelFilter;

/// Logger for the console and any service wrapper. `plain` drops the
/// timestamp for journals that stamp lines themselves.
pub fn init_logger(plain: bool) {
    let mut builder = Builder::new();

    if plain {
        builder.format(|formatter, record| {
            writeln!(formatter, "[{}] {}", record.level(), record.args())
        });
    } else {
        builder.format(|formatter, record| {
            writeln!(
                formatter,
                "{} {:<5} {}: {}",
                Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
                record.level(),
                record.target(),
                record.args()
            )
        });
    }

    if let Ok(var) = env::var("RUST_LOG") {
        builder.parse_filters(&var);
    } else {
        builder.filter(None, LevelFilter::Info);
    }

    builder.init();
}
