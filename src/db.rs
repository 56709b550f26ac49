use std::{env, fs};

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use diesel::sqlite::SqliteConnection;

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

const INSTANCE_DIR: &str = "instance";

// Cascade and uniqueness rules live here, not in ORM defaults.
const CREATE_SCHEMA_SQL: &str = "
CREATE TABLE chefs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

CREATE TABLE chef_profiles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    specialty TEXT,
    years_experience INTEGER,
    chef_id INTEGER NOT NULL UNIQUE REFERENCES chefs(id) ON DELETE CASCADE
);

CREATE TABLE recipes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    instructions TEXT NOT NULL,
    chef_id INTEGER NOT NULL REFERENCES chefs(id)
);

CREATE TABLE ingredients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE recipe_ingredients (
    recipe_id INTEGER NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
    ingredient_id INTEGER NOT NULL REFERENCES ingredients(id) ON DELETE CASCADE,
    quantity TEXT NOT NULL,
    PRIMARY KEY (recipe_id, ingredient_id)
);
";

const DROP_SCHEMA_SQL: &str = "
DROP TABLE IF EXISTS recipe_ingredients;
DROP TABLE IF EXISTS ingredients;
DROP TABLE IF EXISTS recipes;
DROP TABLE IF EXISTS chef_profiles;
DROP TABLE IF EXISTS chefs;
";

/// SQLite ships with foreign keys off; every connection needs the pragma
/// or the cascade rules above are dead letters.
#[derive(Debug, Clone, Copy)]
struct ForeignKeySetup;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ForeignKeySetup {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON;")
            .map_err(r2d2::Error::QueryError)
    }
}

/// Resolves the database location: `DATABASE_URL` wins, otherwise the
/// instance directory is created and the default file path inside it is used.
pub fn database_url() -> String {
    env::var("DATABASE_URL").unwrap_or_else(|_| {
        fs::create_dir_all(INSTANCE_DIR).expect("failed to create instance directory");
        format!("{INSTANCE_DIR}/receitas.db")
    })
}

pub fn establish_pool(database_url: &str) -> DbPool {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    r2d2::Pool::builder()
        .connection_customizer(Box::new(ForeignKeySetup))
        .build(manager)
        .expect("Failed to create pool.")
}

pub fn establish_connection(database_url: &str) -> SqliteConnection {
    let mut conn = SqliteConnection::establish(database_url)
        .unwrap_or_else(|_| panic!("Error connecting to {}", database_url));
    conn.batch_execute("PRAGMA foreign_keys = ON;")
        .expect("failed to enable foreign keys");
    conn
}

pub fn create_schema(conn: &mut SqliteConnection) -> QueryResult<()> {
    conn.batch_execute(CREATE_SCHEMA_SQL)
}

pub fn drop_schema(conn: &mut SqliteConnection) -> QueryResult<()> {
    conn.batch_execute(DROP_SCHEMA_SQL)
}

pub fn reset_schema(conn: &mut SqliteConnection) -> QueryResult<()> {
    drop_schema(conn)?;
    create_schema(conn)
}
