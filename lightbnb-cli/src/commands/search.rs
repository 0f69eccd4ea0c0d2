//! One-shot property search
//!
//! Prints matching properties as JSON, or with `--print-sql` the generated
//! statement and its parameters without touching the database.

use anyhow::{Context, Result};
use clap::Parser;

use lightbnb_server::db::{create_pool, PropertyRepo};
use lightbnb_server::models::{PropertyCriteria, ResultLimit, DEFAULT_LIMIT};
use lightbnb_server::query::{PropertySearch, SqlParam};

use crate::config;

/// Arguments for the search command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Match cities containing this text (blank means any city)
    #[arg(long)]
    pub city: Option<String>,

    /// Only properties owned by this user id
    #[arg(long)]
    pub owner_id: Option<i32>,

    /// Minimum cost per night (inclusive)
    #[arg(long)]
    pub minimum_price_per_night: Option<i32>,

    /// Maximum cost per night (inclusive)
    #[arg(long)]
    pub maximum_price_per_night: Option<i32>,

    /// Minimum average review rating (inclusive)
    #[arg(long)]
    pub minimum_rating: Option<f64>,

    /// Number of results (1-100)
    #[arg(long, short = 'n', default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,

    /// Print the generated SQL and parameters instead of running it
    #[arg(long)]
    pub print_sql: bool,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

impl SearchArgs {
    fn criteria(&self) -> PropertyCriteria {
        let mut criteria = PropertyCriteria {
            city: None,
            owner_id: self.owner_id,
            minimum_price_per_night: self.minimum_price_per_night,
            maximum_price_per_night: self.maximum_price_per_night,
            minimum_rating: self.minimum_rating,
        };
        let city = self.city.as_deref().map(str::trim).filter(|c| !c.is_empty());
        if let Some(city) = city {
            criteria = criteria.city_containing(city);
        }
        criteria
    }
}

fn param_json(param: &SqlParam) -> serde_json::Value {
    match param {
        SqlParam::Text(v) => serde_json::json!(v),
        SqlParam::Int(v) => serde_json::json!(v),
        SqlParam::BigInt(v) => serde_json::json!(v),
        SqlParam::Float(v) => serde_json::json!(v),
    }
}

/// Run a property search
pub async fn run_search(args: SearchArgs) -> Result<()> {
    let criteria = args.criteria();
    let limit = ResultLimit::new(args.limit)?;

    if args.print_sql {
        let query = PropertySearch::new(&criteria, limit).build()?;
        let params: Vec<_> = query.params.iter().map(param_json).collect();
        println!("{}", query.sql);
        println!("{}", serde_json::Value::Array(params));
        return Ok(());
    }

    let database_url = config::database_url(args.database_url)?;
    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    let rows = PropertyRepo::new(&pool).search(&criteria, limit).await?;
    tracing::info!(count = rows.len(), "search complete");
    println!("{}", serde_json::to_string_pretty(&rows)?);

    Ok(())
}
