use std::{env, path::PathBuf, sync::Once};

const DEFAULT_DIR_NAME: &str = ".dapur_core";
const DATA_FILE: &str = "dapur_kita_data.json";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("dapur_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application-specific data directory, defaulting to
/// `~/.dapur_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("DAPUR_CORE_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path of the managed record-store file. The file name matches the
/// original system so an existing data file is picked up as-is.
pub fn data_file() -> PathBuf {
    app_data_dir().join(DATA_FILE)
}
