use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
}

impl Config {
    pub fn new(database_url: String) -> Self {
        Self {
            database_url,
            max_connections: 5,
        }
    }

    /// Single-connection config, used with `sqlite::memory:` where every
    /// pool connection would otherwise see a different database.
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }
}
