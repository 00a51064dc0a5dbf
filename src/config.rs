use std::env;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
}

impl Config {
    /// Reads configuration from the environment. A missing `DATABASE_URL`
    /// is fatal: the service cannot start without its backing store.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        Ok(Config { database_url })
    }
}
