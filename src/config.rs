use crate::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Reads RIOT_API_KEY from the environment (a `.env` file is honored).
    /// A missing key fails here, at startup, instead of on the first call.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("RIOT_API_KEY").map_err(|_| {
            AppError::Config("RIOT_API_KEY not found in environment or .env file".to_string())
        })?;

        Ok(Config { api_key })
    }
}
