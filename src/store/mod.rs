pub mod csv_file;
pub mod memory;

use crate::config::Config;
use crate::domain::contact::Contact;
use crate::errors::AppError;
use std::fs;
use std::path::Path;

pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    /// Replaces everything previously saved with `contacts`.
    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMedium {
    Mem,
    Csv,
}

impl StorageMedium {
    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMedium::Mem)
    }

    pub fn is_which(&self) -> &str {
        if self.is_mem() { "mem" } else { "csv" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.trim().to_lowercase().as_str() {
            "mem" => Ok(StorageMedium::Mem),
            "csv" => Ok(StorageMedium::Csv),
            _ => Err(AppError::Validation(format!(
                "Not a recognized storage medium: '{}'",
                str
            ))),
        }
    }
}

pub fn parse_storage_type(config: &Config) -> Box<dyn ContactStore> {
    match config.storage {
        StorageMedium::Mem => Box::new(memory::MemStore::with_contacts(
            memory::sample_contacts(),
        )),
        StorageMedium::Csv => Box::new(csv_file::CsvStore::new(&config.csv_path)),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
