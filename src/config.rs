use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` runs the service on the in-memory store.
    pub database_url: Option<String>,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    /// Allowed CORS origins. Empty allows any origin.
    pub cors_origins: Vec<String>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let host: IpAddr = env_or("INTERVIEWLOG_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid INTERVIEWLOG_HOST: {e}"))?;

        let port: u16 = env_or("PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let max_body_size: usize = env_or("INTERVIEWLOG_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid INTERVIEWLOG_MAX_BODY_SIZE: {e}"))?;

        let cors_origins = parse_origins(&env_or("INTERVIEWLOG_CORS_ORIGINS", ""));

        let log_level = env_or("INTERVIEWLOG_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            max_body_size,
            cors_origins,
            log_level,
        })
    }
}

pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
