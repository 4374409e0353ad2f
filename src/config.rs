use crate::authz::AuthzMode;
use crate::errors::AppError;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_BATCH_LIMIT: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub mode: AuthzMode,
    pub batch_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            mode: AuthzMode::default(),
            batch_limit: DEFAULT_BATCH_LIMIT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("APP_PORT")
            .map(|val| val.parse::<u16>())
            .unwrap_or(Ok(DEFAULT_PORT))
            .map_err(|_| AppError::configuration("APP_PORT must be a valid port number"))?;

        let mode = match lookup("AUTHZ_MODE") {
            Some(val) => AuthzMode::parse(&val)
                .ok_or_else(|| AppError::configuration("AUTHZ_MODE must be one of off, advisory, strict"))?,
            None => AuthzMode::default(),
        };

        let batch_limit = lookup("DECISION_BATCH_LIMIT")
            .map(|val| val.parse::<usize>())
            .unwrap_or(Ok(DEFAULT_BATCH_LIMIT))
            .map_err(|_| AppError::configuration("DECISION_BATCH_LIMIT must be a valid integer"))?;

        if batch_limit == 0 {
            return Err(AppError::configuration("DECISION_BATCH_LIMIT must be positive"));
        }

        Ok(Self { port, mode, batch_limit })
    }

    pub fn with_mode(mut self, mode: AuthzMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_batch_limit(mut self, batch_limit: usize) -> Self {
        self.batch_limit = batch_limit;
        self
    }
}

/// Loads `.env` from the working directory, falling back to the crate-local one.
pub fn load_env() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    let crate_env = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
    let _ = dotenvy::from_path(crate_env);
}
