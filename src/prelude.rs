pub use crate::cli::{command, run_app};
pub use crate::config::Config;
pub use crate::domain::{
    ContactDirectory, SearchOutcome, SortKey, Upsert,
    book::ContactBook,
    contact::{self, Contact, IdentityScheme},
};
pub use crate::errors::AppError;
pub use crate::store::{
    ContactStore, StorageMedium, csv_file::CsvStore, memory::MemStore, parse_storage_type,
};
