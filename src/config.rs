use std::net::SocketAddr;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    pub db_max_connections: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://movies.db?mode=rwc".to_string());

        let db_max_connections = std::env::var("DB_MAX_CONNECTIONS").ok();

        Self::from_parts(&host, &port, database_url, db_max_connections.as_deref())
    }

    fn from_parts(
        host: &str,
        port: &str,
        database_url: String,
        db_max_connections: Option<&str>,
    ) -> anyhow::Result<Self> {
        let port: u16 = port.parse().context("PORT")?;
        let db_max_connections: u32 = match db_max_connections {
            Some(raw) => raw.trim().parse().context("DB_MAX_CONNECTIONS")?,
            None => 10,
        };

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            database_url,
            db_max_connections: db_max_connections.max(1),
        })
    }
}
