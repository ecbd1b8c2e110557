use std::env;

use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    pub game: GameConfig,
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub dictionary_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let game = GameConfig {
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./dictionary.txt".to_string()),
        };

        Ok(Config { game })
    }
}
