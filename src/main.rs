use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use tasklite::{config::Config, db, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    if std::env::var("JWT_SECRET").is_err() {
        log::warn!("JWT_SECRET is not set; falling back to the built-in placeholder secret");
    }

    let pool = db::connect(&config.database_url)
        .await
        .expect("Failed to open database");

    log::info!("Server starts at {}", config.server_url());

    let server_pool = pool.clone();
    let result = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(server_pool.clone()))
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(routes::config)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await;

    pool.close().await;
    result
}
