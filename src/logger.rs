/// Logging setup: appends to the configured log file, falls back to stderr

use std::io::Write;
use std::path::Path;
use log::LevelFilter;

pub fn init(log_file: &str) {
    let mut builder = env_logger::Builder::new();

    // RUST_LOG replaces the default filter entirely
    if let Ok(log_level) = std::env::var("RUST_LOG") {
        builder.parse_filters(&log_level);
    } else {
        builder.filter_level(LevelFilter::Info);
        builder.filter_module("eframe", LevelFilter::Warn);
        builder.filter_module("egui", LevelFilter::Warn);
        builder.filter_module("wgpu", LevelFilter::Warn);
        builder.filter_module("reqwest", LevelFilter::Warn);
        builder.filter_module("hyper", LevelFilter::Warn);
    }

    // [HH:MM:SS LEVEL] target - message
    builder.format(|buf, record| {
        let now = chrono::Local::now().format("%H:%M:%S");
        writeln!(
            buf,
            "[{} {}] {} - {}",
            now,
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(dir) = Path::new(log_file).parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            let _ = std::fs::create_dir_all(dir);
        }
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file);

    match file {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            eprintln!("Cannot open log file {}: {}, logging to stderr", log_file, e);
            builder.target(env_logger::Target::Stderr);
        }
    }

    builder.init();
    log::info!("Logging initialised ✓");
}
