//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables (optionally seeded
//! from a `.env` file) once at startup and passed down explicitly.

use anyhow::{anyhow, Context, Result};
use chrono::{Duration, Utc};
use std::env;

/// Default lifetime of access tokens handed out at login
const DEFAULT_ACCESS_TOKEN_DURATION: &str = "15m";

/// Default HTTP port
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection URL
    pub database_url: String,

    /// Symmetric secret used to sign access tokens
    pub token_symmetric_key: String,

    /// Lifetime of access tokens issued at login
    pub access_token_duration: Duration,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or_else(|| anyhow!("DATABASE_URL is required"))?;
        let token_symmetric_key = lookup("TOKEN_SYMMETRIC_KEY")
            .ok_or_else(|| anyhow!("TOKEN_SYMMETRIC_KEY is required"))?;

        let raw_duration = lookup("ACCESS_TOKEN_DURATION")
            .unwrap_or_else(|| DEFAULT_ACCESS_TOKEN_DURATION.to_string());
        let access_token_duration = parse_duration(&raw_duration)
            .with_context(|| format!("invalid ACCESS_TOKEN_DURATION: {raw_duration}"))?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid PORT: {raw}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            token_symmetric_key,
            access_token_duration,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "jokebox=debug,tower_http=info".to_string()),
            port,
        })
    }
}

/// Parse a duration such as `900`, `30s`, `15m`, `1h30m` or `7d`.
///
/// Bare numbers are seconds. Otherwise the value is one or more
/// `<number><unit>` segments with units `s`, `m`, `h` or `d`, summed.
/// The result must be strictly positive and small enough to be added to
/// the current time.
pub fn parse_duration(raw: &str) -> Result<Duration> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(anyhow!("duration is empty"));
    }

    let duration = if raw.bytes().all(|b| b.is_ascii_digit()) {
        let secs: i64 = raw.parse().map_err(|_| anyhow!("duration out of range"))?;
        Duration::try_seconds(secs).ok_or_else(|| anyhow!("duration out of range"))?
    } else {
        parse_segments(raw)?
    };

    if duration <= Duration::zero() {
        return Err(anyhow!("duration must be positive"));
    }

    if Utc::now().checked_add_signed(duration).is_none() {
        return Err(anyhow!("duration out of range"));
    }

    Ok(duration)
}

fn parse_segments(raw: &str) -> Result<Duration> {
    let mut total = Duration::zero();
    let mut rest = raw;

    while !rest.is_empty() {
        let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        let (digits, tail) = rest.split_at(digits_end);
        let unit_end = tail.find(|c: char| c.is_ascii_digit()).unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_end);

        let value: i64 = digits
            .parse()
            .map_err(|_| anyhow!("expected a number followed by s, m, h or d"))?;

        let segment = match unit {
            "s" => Duration::try_seconds(value),
            "m" => Duration::try_minutes(value),
            "h" => Duration::try_hours(value),
            "d" => Duration::try_days(value),
            "" => return Err(anyhow!("missing unit after {value}")),
            other => return Err(anyhow!("unknown duration unit '{other}'")),
        }
        .ok_or_else(|| anyhow!("duration out of range"))?;

        total = total
            .checked_add(&segment)
            .ok_or_else(|| anyhow!("duration out of range"))?;
        rest = tail;
    }

    Ok(total)
}
