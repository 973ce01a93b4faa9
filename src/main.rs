use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use chancekit_backend::{
    config::Config, handlers, middlewares::create_cors, services::DrawService,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置
    let config = Config::from_toml().expect("Failed to load configuration file");

    // 创建抽奖服务（默认线程本地 RNG；服务端权威部署可换注入源）
    let draw_service = DrawService::new(config.draw.clone());

    log::info!(
        "Starting HTTP server at {}:{} (strict_weights={})",
        config.server.host,
        config.server.port,
        config.draw.strict_weights
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(draw_service.clone()))
            .configure(swagger_config)
            .service(web::scope("/api/v1").configure(handlers::draw_config))
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
