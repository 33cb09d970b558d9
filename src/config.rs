use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// Process configuration, read once at startup. Immutable afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub mongodb_uri: String,
    pub jwt_secret: String,
    pub admin_password_hash: String,
    pub allowed_origins: Vec<String>,
    pub environment: Environment,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().context("PORT is not a valid port number")?,
            Err(_) => 5000,
        };

        let mongodb_uri = env::var("MONGODB_URI").context("MONGODB_URI not set")?;
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET not set")?;
        let admin_password_hash =
            env::var("ADMIN_PASSWORD_HASH").context("ADMIN_PASSWORD_HASH not set")?;

        let allowed_origins = match env::var("ALLOWED_ORIGINS") {
            Ok(raw) => parse_origins(&raw),
            Err(_) if environment == Environment::Development => {
                vec!["http://localhost:3000".to_string()]
            }
            Err(_) => Vec::new(),
        };

        Ok(Self {
            port,
            mongodb_uri,
            jwt_secret,
            admin_password_hash,
            allowed_origins,
            environment,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_origins() {
        let origins = parse_origins("https://example.com, http://localhost:3000");
        assert_eq!(
            origins,
            vec!["https://example.com", "http://localhost:3000"]
        );
    }

    #[test]
    fn ignores_empty_origin_entries() {
        assert!(parse_origins(" , ,").is_empty());
        assert_eq!(parse_origins("https://a.dev,,").len(), 1);
    }
}
