use actix_web::{middleware, web, App, HttpServer};

use receitas::{db, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // set up database connection pool
    let database_url = db::database_url();
    let pool = db::establish_pool(&database_url);

    log::info!("starting HTTP server at http://localhost:8080");

    HttpServer::new(move || {
        App::new()
            // set up DB pool to be used with web::Data<Pool> extractor
            .app_data(web::Data::new(pool.clone()))
            .wrap(middleware::Logger::default())
            .configure(handlers::configure)
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}
