use std::env;

pub const API_URL_ENV: &str = "MAILPRIO_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Resolved once at bootstrap; the client never re-reads the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
}

impl Settings {
    pub fn resolve(override_url: Option<&str>) -> Self {
        let from_env = env::var(API_URL_ENV).ok();
        Self::from_sources(override_url, from_env.as_deref())
    }

    fn from_sources(override_url: Option<&str>, env_url: Option<&str>) -> Self {
        let api_url = pick(override_url)
            .or_else(|| pick(env_url))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

fn pick(candidate: Option<&str>) -> Option<String> {
    candidate
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
}
