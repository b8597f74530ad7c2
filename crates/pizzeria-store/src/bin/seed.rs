//! # Seed Data Generator
//!
//! Writes a demo menu and a batch of orders for development.
//!
//! ## Usage
//! ```bash
//! # 40 orders (default) into the configured data directory
//! cargo run -p pizzeria-store --bin seed
//!
//! # Custom amount and directory
//! cargo run -p pizzeria-store --bin seed -- --orders 200 --data-dir ./demo
//! ```
//!
//! ## Generated Data
//! - Six pizzas covering every crust type, one of them removed afterwards
//! - Four drinks, one of them sold out afterwards
//! - Orders spread over recent days, cycling through customers,
//!   sizes and drinks; every third order is completed
//!
//! The generator refuses to write into a store that already has records.

use chrono::{Duration, Local};
use pizzeria_core::{
    CrustType, DrinkChoice, DrinkEdit, DrinkSize, Money, NewDrink, NewPizza, OrderRequest,
    PizzaSize,
};
use pizzeria_store::{Pizzeria, StoreConfig};
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// (name, toppings, crust, cents)
const PIZZAS: &[(&str, u32, CrustType, i64)] = &[
    ("Margherita", 2, CrustType::Thin, 1099),
    ("Pepperoni", 3, CrustType::Thick, 1249),
    ("Four Cheese", 4, CrustType::Stuffed, 1399),
    ("Garden Veggie", 6, CrustType::GlutenFree, 1449),
    ("Meat Lovers", 5, CrustType::Thick, 1599),
    ("Hawaiian", 3, CrustType::Thin, 1199),
];

/// (name, cents)
const DRINKS: &[(&str, i64)] = &[
    ("Cola", 199),
    ("Lemonade", 249),
    ("Iced Tea", 229),
    ("Sparkling Water", 179),
];

const CUSTOMERS: &[&str] = &[
    "ann@example.com",
    "bob@example.com",
    "carla@example.com",
    "dev@example.com",
    "erin@example.com",
];

const DRINK_SIZES: [DrinkSize; 3] = [DrinkSize::Small, DrinkSize::Medium, DrinkSize::Large];

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pizzeria=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_help() {
    println!("Pizzeria Seed Data Generator");
    println!();
    println!("Usage: seed [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -n, --orders <N>       Number of orders to generate (default: 40)");
    println!("  -d, --data-dir <PATH>  Data directory (default: from pizzeria.toml)");
    println!("  -h, --help             Show this help message");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut order_count: usize = 40;
    let mut data_dir: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--orders" | "-n" => {
                if i + 1 < args.len() {
                    order_count = args[i + 1].parse().unwrap_or(40);
                    i += 1;
                }
            }
            "--data-dir" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_help();
                return Ok(());
            }
        }
        i += 1;
    }

    let mut config = StoreConfig::load(None)?;
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }

    let pizzeria = Pizzeria::open(&config)?;

    let existing = pizzeria.pizzas().view_all()?.len()
        + pizzeria.drinks().view_all()?.len()
        + pizzeria.orders().view_all()?.len();
    if existing > 0 {
        println!("Store at {} already has {} records", config.data_dir().display(), existing);
        println!("  Skipping seed to avoid mixing data.");
        println!("  Delete the record files to regenerate.");
        return Ok(());
    }

    info!(data_dir = %config.data_dir().display(), orders = order_count, "Seeding store");

    for (name, topping_count, crust, cents) in PIZZAS {
        pizzeria.pizzas().add(NewPizza {
            name: name.to_string(),
            topping_count: *topping_count,
            crust: *crust,
            price: Money::from_cents(*cents),
        })?;
    }

    for (name, cents) in DRINKS {
        pizzeria.drinks().add(NewDrink {
            name: name.to_string(),
            price: Money::from_cents(*cents),
        })?;
    }

    let today = Local::now().date_naive();
    let start = today - Duration::days(order_count as i64 / 2);

    for n in 0..order_count {
        let pizza_id = (n * 7 % PIZZAS.len()) as u32 + 1;
        let drink = (n % 2 == 0).then(|| DrinkChoice {
            drink_id: (n * 3 % DRINKS.len()) as u32 + 1,
            size: DRINK_SIZES[n % DRINK_SIZES.len()],
        });

        let request = OrderRequest {
            customer_email: CUSTOMERS[(n + n / CUSTOMERS.len()) % CUSTOMERS.len()].to_string(),
            pizza_id,
            pizza_size: PizzaSize::ALL[(n + pizza_id as usize) % PizzaSize::ALL.len()],
            drink,
        };

        let order = pizzeria
            .orders()
            .place_order_on(request, start + Duration::days(n as i64 / 2))?;

        if n % 3 == 0 {
            pizzeria.orders().mark_complete(order.id)?;
        }
    }

    // Menu changes after the fact, so the removed / sold-out reports have rows
    pizzeria.pizzas().remove(PIZZAS.len() as u32)?;
    pizzeria.drinks().edit(DRINKS.len() as u32, DrinkEdit::SoldOut(true))?;

    let reports = pizzeria.reports();
    let summary = serde_json::json!({
        "data_dir": config.data_dir().display().to_string(),
        "pizzas": PIZZAS.len(),
        "drinks": DRINKS.len(),
        "revenue": reports.revenue_summary()?,
        "top_pizzas": reports.top_pizzas(3)?,
    });

    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
