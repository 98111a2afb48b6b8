use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
    pub surrealdb: SurrealDbConfig,
    pub cache: CacheConfig,
    pub hashing: HashingConfig,
    pub resilience: ResilienceConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: String,
    /// Export spans to an OTLP collector in addition to stdout.
    pub otlp: bool,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SurrealDbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub namespace: String,
    pub database: String,
    pub migration: bool,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct CacheConfig {
    pub enabled: bool,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct HashingConfig {
    pub algorithm: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ResilienceConfig {
    /// Consecutive store failures that open the circuit.
    pub failure_threshold: u32,
    pub open_seconds: u64,
    pub half_open_calls: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            service: ServiceConfig {
                name: "account-service".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                otlp: false,
            },
            http: HttpConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
            },
            surrealdb: SurrealDbConfig {
                host: "localhost".to_string(),
                port: 8080,
                username: "root".to_string(),
                password: "root".to_string(),
                namespace: "store".to_string(),
                database: "accounts".to_string(),
                migration: true,
            },
            cache: CacheConfig { enabled: true },
            hashing: HashingConfig {
                algorithm: "SHA-256".to_string(),
            },
            resilience: ResilienceConfig {
                failure_threshold: 5,
                open_seconds: 30,
                half_open_calls: 1,
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!(
                "config/{}.toml",
                std::env::var("RUST_ENV").unwrap_or("development".to_string())
            )))
            .merge(Env::prefixed("APP_").split("__"))
    }
}
