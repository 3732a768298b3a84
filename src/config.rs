//! Session configuration: API endpoints, storage key and navigation routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser builds have no process environment, so `from_build_env` reads
//! values baked in at compile time. SSR and native callers use `from_env`.
//! Both funnel through `from_lookup`, which is what the tests drive.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://softinvite-api.onrender.com";
pub const DEFAULT_ME_PATH: &str = "/api/auth/me";
pub const DEFAULT_LOGIN_PATH: &str = "/admin/login";
pub const DEFAULT_REGISTER_PATH: &str = "/admin/register";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_LANDING_ROUTE: &str = "/home";
pub const DEFAULT_SIGN_IN_ROUTE: &str = "/sign-in";
pub const DEFAULT_SIGN_UP_ROUTE: &str = "/sign-up";

/// Errors raised while building a [`SessionConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The API base URL is neither empty nor an `http(s)://` URL.
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// A path does not start with `/`.
    #[error("invalid path for {key}: {value}")]
    InvalidPath { key: &'static str, value: String },
}

/// Client-side routes the session manager navigates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRoutes {
    /// Where a successful login lands.
    pub landing: String,
    /// Where logout, failed validation and successful registration land.
    pub sign_in: String,
    pub sign_up: String,
}

impl Default for SessionRoutes {
    fn default() -> Self {
        Self {
            landing: DEFAULT_LANDING_ROUTE.to_owned(),
            sign_in: DEFAULT_SIGN_IN_ROUTE.to_owned(),
            sign_up: DEFAULT_SIGN_UP_ROUTE.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Origin of the admin API. Empty means same origin.
    pub api_base_url: String,
    /// Profile endpoint. Resolved against the page origin unless absolute.
    pub me_path: String,
    pub login_path: String,
    pub register_path: String,
    /// `localStorage` key holding the bearer token.
    pub token_key: String,
    pub routes: SessionRoutes,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            me_path: DEFAULT_ME_PATH.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            register_path: DEFAULT_REGISTER_PATH.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            routes: SessionRoutes::default(),
        }
    }
}

impl SessionConfig {
    /// Build config by overlaying values from `lookup` onto the defaults.
    ///
    /// Recognized keys:
    /// - `SESSION_API_BASE_URL`: empty or `http(s)://...`, trailing `/` trimmed
    /// - `SESSION_ME_PATH`: profile endpoint path or absolute URL
    /// - `SESSION_TOKEN_KEY`: storage key for the bearer token
    ///
    /// Routes are not overridable: they must match the paths mounted by
    /// [`crate::app::App`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the base URL or profile path is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = lookup("SESSION_API_BASE_URL") {
            cfg.api_base_url = parse_base_url(&raw)?;
        }
        if let Some(raw) = lookup("SESSION_ME_PATH") {
            cfg.me_path = parse_me_path(&raw)?;
        }
        if let Some(raw) = lookup("SESSION_TOKEN_KEY") {
            let key = raw.trim();
            if !key.is_empty() {
                cfg.token_key = key.to_owned();
            }
        }

        Ok(cfg)
    }

    /// Build config from process environment variables.
    ///
    /// # Errors
    ///
    /// See [`SessionConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from variables captured by `option_env!` at compile time.
    ///
    /// # Errors
    ///
    /// See [`SessionConfig::from_lookup`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                "SESSION_API_BASE_URL" => option_env!("SESSION_API_BASE_URL"),
                "SESSION_ME_PATH" => option_env!("SESSION_ME_PATH"),
                "SESSION_TOKEN_KEY" => option_env!("SESSION_TOKEN_KEY"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Profile endpoint URL. Relative paths stay relative to the page origin.
    pub fn me_url(&self) -> String {
        self.me_path.clone()
    }

    pub fn login_url(&self) -> String {
        format!("{}{}", self.api_base_url, self.login_path)
    }

    pub fn register_url(&self) -> String {
        format!("{}{}", self.api_base_url, self.register_path)
    }
}

fn is_absolute_url(raw: &str) -> bool {
    raw.starts_with("http://") || raw.starts_with("https://")
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() || is_absolute_url(trimmed) {
        Ok(trimmed.to_owned())
    } else {
        Err(ConfigError::InvalidBaseUrl(raw.to_owned()))
    }
}

fn parse_me_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if is_absolute_url(trimmed) {
        return Ok(trimmed.to_owned());
    }
    if trimmed.starts_with('/') {
        Ok(trimmed.to_owned())
    } else {
        Err(ConfigError::InvalidPath { key: "SESSION_ME_PATH", value: raw.to_owned() })
    }
}
