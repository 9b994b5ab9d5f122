use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::SortKey as BookSortKey;
use crate::store::csv_file::CSV_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Storage choice (mem, csv) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("csv"))]
    pub storage_choice: String,

    /// Path of the .csv file used by csv storage
    #[arg(long, env = "CSV_STORAGE_PATH", default_value_t = String::from(CSV_STORAGE_PATH))]
    pub path: String,

    /// What identifies a contact: "name" or "name-surname"
    #[arg(long, env = "CONTACT_IDENTITY", default_value_t = String::from("name-surname"))]
    pub identity: String,

    /// Log level or filter spec written to stderr
    #[arg(long, env = "CONTACT_BOOK_LOG", default_value_t = String::from("warn"))]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact, or update phone and email of an existing one
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact surname
        #[arg(long)]
        surname: Option<String>,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,
    },
    /// Show the contact with this exact name (and surname)
    Find {
        #[arg(long)]
        name: String,

        #[arg(long)]
        surname: Option<String>,
    },
    /// Show contacts with any field containing the query.
    /// An empty query shows every contact
    Search {
        /// Text to look for (case-insensitive)
        query: Option<String>,
    },
    /// List contacts
    List {
        /// Sort ordering (default is insertion order)
        #[arg(long)]
        sort: Option<SortKey>,

        /// Reverse order
        #[arg(short, long)]
        reverse: bool,
    },
    /// Delete a contact by name (and surname)
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,

        /// Surname of contact to delete
        #[arg(long)]
        surname: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Supported sort keys
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum SortKey {
    Name,
    Surname,
    Phone,
    Email,
}

impl From<SortKey> for BookSortKey {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Name => BookSortKey::Name,
            SortKey::Surname => BookSortKey::Surname,
            SortKey::Phone => BookSortKey::Phone,
            SortKey::Email => BookSortKey::Email,
        }
    }
}
