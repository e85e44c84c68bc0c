use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use dotenv::dotenv;
use lightbnb_db::config::{self, Config};
use lightbnb_db::models::{NewProperty, NewUser, PropertyReview, Reservation};
use lightbnb_db::{PropertyRepository, UserRepository};
use serde::Deserialize;
use serde_json::{Map, Value};
use sqlx::PgPool;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::process;
use std::time::Instant;

// --- ANSI colors ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

const SAMPLE_SEED: &str = include_str!("../../seeds/sample.json");

// --- Seed file structures ---

#[derive(Debug, Deserialize)]
struct SeedFile {
    users: Vec<NewUser>,
    #[serde(default)]
    properties: Vec<SeedProperty>,
    #[serde(default)]
    reservations: Vec<SeedReservation>,
}

/// Property listing keyed by its owner's email instead of a database id
#[derive(Debug, Deserialize)]
struct SeedProperty {
    owner_email: String,
    #[serde(flatten)]
    listing: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct SeedReservation {
    guest_email: String,
    property_title: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    #[serde(default)]
    review: Option<SeedReview>,
}

#[derive(Debug, Deserialize)]
struct SeedReview {
    rating: i16,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Default)]
struct PopulateSummary {
    users: usize,
    properties: usize,
    reservations: usize,
    reviews: usize,
}

fn load_seed() -> anyhow::Result<SeedFile> {
    let raw = match env::var("SEED_FILE") {
        Ok(path) => fs::read_to_string(&path).with_context(|| format!("reading {}", path))?,
        Err(_) => SAMPLE_SEED.to_string(),
    };
    serde_json::from_str(&raw).context("parsing seed file")
}

async fn insert_reservation(
    pool: &PgPool,
    guest_id: i32,
    property_id: i32,
    seed: &SeedReservation,
) -> anyhow::Result<Reservation> {
    let reservation = sqlx::query_as::<_, Reservation>(
        r#"
        INSERT INTO reservations (guest_id, property_id, start_date, end_date)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(guest_id)
    .bind(property_id)
    .bind(seed.start_date)
    .bind(seed.end_date)
    .fetch_one(pool)
    .await
    .context("inserting reservation")?;

    Ok(reservation)
}

async fn insert_review(
    pool: &PgPool,
    reservation: &Reservation,
    seed: &SeedReview,
) -> anyhow::Result<PropertyReview> {
    let review = sqlx::query_as::<_, PropertyReview>(
        r#"
        INSERT INTO property_reviews (guest_id, property_id, reservation_id, rating, message)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(reservation.guest_id)
    .bind(reservation.property_id)
    .bind(reservation.id)
    .bind(seed.rating)
    .bind(&seed.message)
    .fetch_one(pool)
    .await
    .context("inserting review")?;

    Ok(review)
}

async fn populate(pool: &PgPool, seed: SeedFile) -> anyhow::Result<PopulateSummary> {
    let mut summary = PopulateSummary::default();
    let mut user_ids: HashMap<String, i32> = HashMap::new();
    let mut property_ids: HashMap<String, i32> = HashMap::new();

    for user in &seed.users {
        let id = UserRepository::add_user(pool, user)
            .await
            .with_context(|| format!("adding user {}", user.email))?;
        println!("{}  + user #{} {}{}", GREEN, id, user.name, RESET);
        user_ids.insert(user.email.clone(), id);
        summary.users += 1;
    }

    for seed_property in seed.properties {
        let owner_id = *user_ids
            .get(&seed_property.owner_email)
            .ok_or_else(|| anyhow!("unknown owner {}", seed_property.owner_email))?;

        let mut listing = seed_property.listing;
        listing.insert("owner_id".to_string(), Value::from(owner_id));
        let new_property: NewProperty =
            serde_json::from_value(Value::Object(listing)).context("invalid property entry")?;

        let property = PropertyRepository::add_property(pool, &new_property)
            .await
            .with_context(|| format!("adding property {}", new_property.title))?;
        println!(
            "{}  + property #{} {} ({}){}",
            GREEN, property.id, property.title, property.city, RESET
        );
        property_ids.insert(property.title.clone(), property.id);
        summary.properties += 1;
    }

    for seed_reservation in &seed.reservations {
        let guest_id = *user_ids
            .get(&seed_reservation.guest_email)
            .ok_or_else(|| anyhow!("unknown guest {}", seed_reservation.guest_email))?;
        let property_id = *property_ids
            .get(&seed_reservation.property_title)
            .ok_or_else(|| anyhow!("unknown property {}", seed_reservation.property_title))?;

        let reservation = insert_reservation(pool, guest_id, property_id, seed_reservation).await?;
        summary.reservations += 1;

        if let Some(seed_review) = &seed_reservation.review {
            let review = insert_review(pool, &reservation, seed_review).await?;
            println!(
                "{}  + reservation #{} with review {}/5{}",
                GREEN, reservation.id, review.rating, RESET
            );
            summary.reviews += 1;
        } else {
            println!("{}  + reservation #{}{}", GREEN, reservation.id, RESET);
        }
    }

    Ok(summary)
}

fn print_summary(summary: &PopulateSummary, elapsed_secs: f64) {
    println!("\n{}📋 Populate Summary{}", BOLD, RESET);
    println!("────────────────────────────────────────");
    println!("{:<20} {:>10}", "Users", summary.users);
    println!("{:<20} {:>10}", "Properties", summary.properties);
    println!("{:<20} {:>10}", "Reservations", summary.reservations);
    println!("{:<20} {:>10}", "Reviews", summary.reviews);
    println!("────────────────────────────────────────");
    println!("{}✨ Done in {:.1}s{}", GREEN, elapsed_secs, RESET);
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    if let Err(e) = config.validate() {
        println!("{}❌ Configuration error: {}{}", RED, e, RESET);
        process::exit(1);
    }

    let seed = match load_seed() {
        Ok(seed) => seed,
        Err(e) => {
            println!("{}❌ {:#}{}", RED, e, RESET);
            process::exit(1);
        }
    };

    println!("\n{}🔍 Connecting to {}...{}", CYAN, config.redacted_url(), RESET);
    let pool = match config::init_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            println!("{}❌ Database unavailable: {}{}", RED, e, RESET);
            process::exit(1);
        }
    };

    if let Err(e) = config::run_migrations(&pool).await {
        println!("{}❌ {}{}", RED, e, RESET);
        process::exit(1);
    }

    // Seeding is not idempotent: skip when the first seed user is already there
    if let Some(first) = seed.users.first() {
        match UserRepository::get_user_with_email(&pool, &first.email).await {
            Ok(Some(_)) => {
                println!(
                    "{}⚠️  {} already exists, database looks populated.{}",
                    YELLOW, first.email, RESET
                );
                return;
            }
            Ok(None) => {}
            Err(e) => {
                println!("{}❌ {}{}", RED, e, RESET);
                process::exit(1);
            }
        }
    }

    println!("{}🚀 Populating...{}\n", BOLD, RESET);
    let started = Instant::now();

    match populate(&pool, seed).await {
        Ok(summary) => print_summary(&summary, started.elapsed().as_secs_f64()),
        Err(e) => {
            println!("{}❌ Populate failed: {:#}{}", RED, e, RESET);
            process::exit(1);
        }
    }

    pool.close().await;
}
