use crate::config::ServerConfig;
use std::path::PathBuf;
use tracing::{error, info};
use warp::{
    http::{header, Method},
    Filter,
};

mod config;
mod handler;

const DEFAULT_CONFIG_PATH: &str = "./server.toml";

#[tokio::main]
async fn main() {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = match ServerConfig::load_or_default(&config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "server.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {}", err);
    }

    if !config.static_dir.is_dir() {
        error!("static directory {} does not exist, run `trunk build` in frontend/", config.static_dir.display());
    }
    info!("serving {} on {}", config.static_dir.display(), config.socket_addr());

    let routes = handler::routes(config.static_dir.clone())
        .with(
            warp::cors()
                .allow_methods(&[Method::OPTIONS, Method::GET])
                .allow_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
                .max_age(300)
                .allow_any_origin(),
        )
        .with(warp::trace::request())
        .recover(handler::recover);

    warp::serve(routes).run(config.socket_addr()).await;
}
