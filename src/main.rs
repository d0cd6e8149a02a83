use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use std::io;

use infra::config::AppConfigImpl;
use log::info;
use log4rs::{
    append::{console::ConsoleAppender, file::FileAppender},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

use server::{consts, lyrics_api, middleware::other};

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {m}{n}";
const LOG_FILE: &str = "lyrics-api.log";

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(LOG_FILE)?;
    let console_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    // 同时输出到控制台和文件
    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .appender(Appender::builder().build("stdout", Box::new(console_appender)))
        .build(
            Root::builder()
                .appender("file")
                .appender("stdout")
                .build(log_level.parse().unwrap_or(log::LevelFilter::Info)),
        )?;

    log4rs::init_config(config)?;
    Ok(())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    init_logging().map_err(|e| io::Error::other(e.to_string()))?;

    let cfg = AppConfigImpl::load().map_err(|e| io::Error::other(e.to_string()))?;
    let server_cfg = cfg.server();

    let app_state = server::AppState::new(&cfg)
        .await
        .map_err(|e| io::Error::other(e.to_string()))?;
    let app_state = web::Data::new(app_state);

    info!(
        "Starting {} on {}:{}",
        consts::SERVICE_NAME,
        server_cfg.host,
        server_cfg.port
    );
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .wrap(Logger::new("%a %{User-Agent}i"))
            .configure(lyrics_api::configure_service)
            .wrap(other::cors())
    })
    .bind((server_cfg.host.as_str(), server_cfg.port))?
    .run()
    .await
}
