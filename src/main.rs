// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config and logging, connect, apply the schema and
// report what the store currently lists

use dotenv::dotenv;
use lightbnb_db::config::{self, Config};
use lightbnb_db::models::PropertyFilter;
use lightbnb_db::PropertyRepository;

#[tokio::main]
async fn main() {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            config.log_level.clone()
        } else {
            "info,sqlx=warn".to_string()
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    log::info!("Starting lightbnb-db...");
    log::info!("Environment: {}", config.environment);

    // 4. Initialize database connection pool
    let pool = match config::init_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    // 5. Apply schema
    if let Err(e) = config::run_migrations(&pool).await {
        log::error!("Failed to migrate database: {}", e);
        std::process::exit(1);
    }

    // 6. Report the cheapest listings
    match PropertyRepository::get_all_properties(&pool, &PropertyFilter::default(), None).await {
        Ok(properties) => {
            log::info!("Cheapest {} listings:", properties.len());
            for listing in &properties {
                log::info!(
                    "  #{} {} ({}) {}.{:02}/night, rating {}",
                    listing.property.id,
                    listing.property.title,
                    listing.property.city,
                    listing.property.cost_per_night / 100,
                    listing.property.cost_per_night % 100,
                    listing
                        .average_rating
                        .map(|r| format!("{:.2}", r))
                        .unwrap_or_else(|| "n/a".to_string())
                );
            }
        }
        Err(e) => {
            log::error!("Failed to list properties: {}", e);
            std::process::exit(1);
        }
    }

    pool.close().await;
}
