use std::sync::Arc;

use mongodb::Client as MongoClient;
use rocket::{
    fairing::{Fairing, Info, Kind},
    Build, Rocket,
};
use serde::Deserialize;

use crate::generator::client::{HttpTextGenerator, SharedGenerator};
use crate::model::mongodb::ensure_indexes_exist;
use crate::store::{mongo::MongoStore, SharedStore};

/// Configuration for the database, derived from `Rocket.toml` and `ROCKET_*`
/// environment variables.
#[derive(Deserialize)]
struct DbConfig {
    // secrets
    db_uri: String,
    // non-secrets
    db_name: String,
}

/// A fairing that loads the MongoDB config, connects to the database,
/// ensures the indexes exist, and places the shared question store into
/// managed state.
pub struct DatabaseFairing;

#[rocket::async_trait]
impl Fairing for DatabaseFairing {
    fn info(&self) -> Info {
        Info {
            name: "MongoDB",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        // Load the config.
        let config = match rocket.figment().extract::<DbConfig>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load database config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };
        info!("Loaded database config, connecting...");
        // Construct the connection.
        let client = match MongoClient::with_uri_str(&config.db_uri).await {
            Ok(client) => client,
            Err(e) => {
                error!("Failed to connect to database: {e}");
                return Err(rocket);
            }
        };
        let db = client.database(&config.db_name);

        // Ensure the required indexes exist.
        if let Err(e) = ensure_indexes_exist(&db).await {
            error!("Failed to connect to database: {e}");
            return Err(rocket);
        }
        info!("...database connection online!");

        // Manage the state.
        let store: SharedStore = Arc::new(MongoStore::new(db));
        rocket = rocket.manage(store);
        Ok(rocket)
    }
}

/// Configuration for the external text-generation service.
#[derive(Deserialize)]
struct GeneratorConfig {
    // non-secrets
    generator_url: String,
    generator_model: String,
    // secrets
    generator_key: String,
}

/// A fairing that loads the generator config and places a shared
/// text-generation client into managed state.
pub struct GeneratorFairing;

#[rocket::async_trait]
impl Fairing for GeneratorFairing {
    fn info(&self) -> Info {
        Info {
            name: "Generator",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        // Load the config.
        let config = match rocket.figment().extract::<GeneratorConfig>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load generator config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };
        let generator: SharedGenerator = Arc::new(HttpTextGenerator::new(
            config.generator_url,
            config.generator_key,
            config.generator_model,
        ));
        info!("Loaded generator config");

        // Manage the state.
        rocket = rocket.manage(generator);
        Ok(rocket)
    }
}
