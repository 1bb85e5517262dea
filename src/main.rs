use actix_web::{web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use std::env;

use fabricio_board::config::AppConfig;
use fabricio_board::db;
use fabricio_board::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://board.db".to_string());
    let config = web::Data::new(AppConfig::from_env());

    let pool = db::create_pool(&database_url)
        .await
        .expect("Failed to create pool");
    db::init_schema(&pool).await.expect("Failed to initialize schema");

    let server_address = "0.0.0.0:8080";
    println!("Server running at http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(config.clone())
            .route(
                "/",
                web::get().to(|| async { HttpResponse::Ok().body("The FabricioBoard server is running!") }),
            )
            .configure(routes::routes::api_configure)
            .configure(routes::routes::admin_configure)
    })
    .bind(server_address)?
    .run()
    .await
}
