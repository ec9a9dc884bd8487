// bandstand-core-client
//
// Copyright: 2024, Bandstand Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ffi::OsStr;
use std::{env, fs};

use secrecy::Secret;
use tracing::metadata::LevelFilter;
pub use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry};
use url::Url;

pub struct DemoConfig {
    pub api_url: Url,
    pub socket_url: Url,
    pub token: Secret<String>,
}

/// Writes JSON logs to `demos/<executable>/logs/<executable>.log`.
pub fn enable_debug_logging(max_level: Level) {
    let exe_path = env::current_exe().expect("Failed to get the current executable path");

    let exe_stem = exe_path
        .file_stem()
        .and_then(OsStr::to_str)
        .expect("Failed to extract file stem from executable name");

    let log_dir = env::current_dir()
        .expect("Cannot determine current directory")
        .join("demos")
        .join(exe_stem)
        .join("logs");
    let log_filename = format!("{}.log", exe_stem);

    let log_file_path = log_dir.join(&log_filename);
    if log_file_path.exists() {
        _ = fs::remove_file(log_file_path);
    }

    let appender = tracing_appender::rolling::never(log_dir, log_filename);

    let json_layer = tracing_subscriber::fmt::Layer::new()
        .json()
        .with_writer(appender)
        .with_ansi(false)
        .with_filter(LevelFilter::from_level(max_level));

    Registry::default().with(json_layer).init();
}

/// Reads API_URL, SOCKET_URL and TOKEN from the command line or from `demos/.env`.
pub fn load_config() -> DemoConfig {
    let args = env::args().skip(1).collect::<Vec<_>>();

    if let [api_url, socket_url, token] = args.as_slice() {
        return DemoConfig {
            api_url: Url::parse(api_url).expect("Invalid API URL"),
            socket_url: Url::parse(socket_url).expect("Invalid socket URL"),
            token: Secret::new(token.to_string()),
        };
    }

    let path = env::current_dir()
        .expect("Cannot determine current directory")
        .join("demos")
        .join(".env");

    dotenvy::from_path(&path).expect(&format!("Missing .env file at {:?}.", path));

    DemoConfig {
        api_url: Url::parse(&env::var("API_URL").expect("Missing 'API_URL' in .env"))
            .expect("Invalid API_URL in .env"),
        socket_url: Url::parse(&env::var("SOCKET_URL").expect("Missing 'SOCKET_URL' in .env"))
            .expect("Invalid SOCKET_URL in .env"),
        token: Secret::new(env::var("TOKEN").expect("Missing 'TOKEN' in .env")),
    }
}
