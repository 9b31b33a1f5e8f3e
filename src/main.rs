use std::env;

use banking_control_panel::db::{establish_connection_pool, get_connection, run_migrations};
use banking_control_panel::models::config::AppConfig;
use banking_control_panel::repository::errors::RepositoryError;
use banking_control_panel::repository::{ClientListQuery, ClientReader, DieselRepository};
use dotenvy::dotenv;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let app_config = match AppConfig::load(&app_env) {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading config: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&app_config.database_url) {
        Ok(pool) => pool,
        Err(err) => {
            log::error!("Failed to establish database connection: {err}");
            std::process::exit(1);
        }
    };

    let migrated = get_connection(&pool)
        .map_err(RepositoryError::from)
        .and_then(|mut conn| run_migrations(&mut conn));
    match migrated {
        Ok(applied) => log::info!("Database ready, {applied} migration(s) applied"),
        Err(err) => {
            log::error!("Failed to migrate database: {err}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);
    match repo.list_clients(ClientListQuery::new().paginate(1, 1)) {
        Ok((total, _)) => log::info!("{total} client(s) stored in {}", app_config.database_url),
        Err(err) => {
            log::error!("Failed to count clients: {err}");
            std::process::exit(1);
        }
    }
}
