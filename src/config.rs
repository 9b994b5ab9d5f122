use crate::cli::command::Cli;
use crate::domain::contact::IdentityScheme;
use crate::errors::AppError;
use crate::store::StorageMedium;
use std::path::PathBuf;

/// Settings resolved from flags, environment variables and `.env`.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageMedium,
    pub csv_path: PathBuf,
    pub identity: IdentityScheme,
    pub log_level: String,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        let csv_path = PathBuf::from(cli.path.trim());
        if csv_path.as_os_str().is_empty() {
            return Err(AppError::Validation("Storage path must not be empty".to_string()));
        }

        Ok(Self {
            storage: StorageMedium::from(&cli.storage_choice)?,
            csv_path,
            identity: IdentityScheme::from(&cli.identity)?,
            log_level: cli.log_level.clone(),
        })
    }
}
