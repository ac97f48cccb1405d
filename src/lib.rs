//! Website and lead intake service for Bayfront Painting: the static
//! marketing site, the estimate form with best-effort notification fan-out,
//! and the keyword-matched paint-guru assistant.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;
