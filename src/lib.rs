#[macro_use]
extern crate rocket;

#[macro_use]
extern crate log;

use rocket::{Build, Rocket};

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod ledger;
pub mod logging;
pub mod model;
pub mod store;

use crate::config::{DatabaseFairing, GeneratorFairing};
use crate::logging::LoggerFairing;

/// Assemble the server: the API routes under `/api`, plus the fairings that
/// load config, connect the question store, and build the generator client.
pub fn build() -> Rocket<Build> {
    rocket::build()
        .mount("/api", api::routes())
        .attach(DatabaseFairing)
        .attach(GeneratorFairing)
        .attach(LoggerFairing)
}
