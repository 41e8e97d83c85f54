//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    use nodepick_app::{App, AppConfig};

    env_logger::init();
    log::info!("Starting NodePick");

    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(&path).unwrap_or_else(|e| {
            log::warn!("Ignoring config {path}: {e}");
            AppConfig::default()
        }),
        None => AppConfig::default(),
    };

    if let Err(e) = App::run(config) {
        log::error!("NodePick stopped: {e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
