use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/eventhub";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            host: parse_var("HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port: parse_var("PORT", DEFAULT_PORT),
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => parse_or(name, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T>(name: &str, raw: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Config: ignoring invalid {} '{}': {}", name, raw, e);
            default
        }
    }
}
