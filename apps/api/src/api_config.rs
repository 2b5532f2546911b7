use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use cmdsuite_core::AppError;
use cmdsuite_domain::Role;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    pub frontend_url: String,
    pub role_permissions_path: Option<PathBuf>,
    pub unmapped_role_fallback: Option<Role>,
    pub dev_seed_profiles: bool,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let api_host = lookup("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = match optional_non_empty(&lookup, "API_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|error| AppError::Validation(format!("invalid API_PORT: {error}")))?,
            None => 3001,
        };

        let frontend_url =
            lookup("FRONTEND_URL").unwrap_or_else(|| "http://localhost:3000".to_owned());
        let parsed_frontend_url = Url::parse(frontend_url.as_str())
            .map_err(|error| AppError::Validation(format!("invalid FRONTEND_URL: {error}")))?;
        // Browsers send the origin without a trailing slash.
        let frontend_url = parsed_frontend_url
            .origin()
            .ascii_serialization();

        let role_permissions_path =
            optional_non_empty(&lookup, "ROLE_PERMISSIONS_PATH").map(PathBuf::from);

        let unmapped_role_fallback = optional_non_empty(&lookup, "UNMAPPED_ROLE_FALLBACK")
            .map(|value| {
                Role::from_str(value.trim()).map_err(|_| {
                    AppError::Validation(format!(
                        "UNMAPPED_ROLE_FALLBACK must be a role storage value, got '{value}'"
                    ))
                })
            })
            .transpose()?;

        let dev_seed_profiles = lookup("DEV_SEED_PROFILES")
            .unwrap_or_else(|| "false".to_owned())
            .eq_ignore_ascii_case("true");

        Ok(Self {
            api_host,
            api_port,
            frontend_url,
            role_permissions_path,
            unmapped_role_fallback,
            dev_seed_profiles,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Validation(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn optional_non_empty(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).filter(|value| !value.trim().is_empty())
}
