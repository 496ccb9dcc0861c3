use crate::errors::{AppError, AppResult};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_host: String,
    pub server_port: u16,
    pub static_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let server_port = env_var_or("SERVER_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| AppError::Config(format!("SERVER_PORT: {e}")))?;

        let bind_host = env_var_or("BIND_HOST", "0.0.0.0");
        if bind_host.trim().is_empty() {
            return Err(AppError::Config("BIND_HOST: empty".into()));
        }

        Ok(Self {
            bind_host,
            server_port,
            static_dir: PathBuf::from(env_var_or("STATIC_DIR", "dashboard/dist")),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.server_port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".into(),
            server_port: 3001,
            static_dir: PathBuf::from("dashboard/dist"),
        }
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
