use anyhow::{Context, Result};

/// Process configuration, read once at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub db_host: String,
    pub port: u16,
}

impl Config {
    pub fn init() -> Result<Self> {
        let db_name =
            std::env::var("DB_NAME").context("Missing environment variable: DB_NAME")?;
        let db_user =
            std::env::var("DB_USER").context("Missing environment variable: DB_USER")?;
        let db_password =
            std::env::var("DB_PASSWORD").context("Missing environment variable: DB_PASSWORD")?;
        let db_host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        Ok(Self {
            db_name,
            db_user,
            db_password,
            db_host,
            port,
        })
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}/{}",
            self.db_user, self.db_password, self.db_host, self.db_name
        )
    }
}
