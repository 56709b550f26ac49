use receitas::{db, seed};

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let database_url = db::database_url();
    log::info!("seeding database at {}", database_url);

    let mut conn = db::establish_connection(&database_url);
    seed::run(&mut conn).expect("failed to seed database");

    println!("Banco de dados inicializado com sucesso!");
}
