use super::*;

use csv::{ReaderBuilder, WriterBuilder};
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

pub const CSV_STORAGE_PATH: &str = "./.instance/contacts.csv";
const HEADERS: [&str; 4] = ["name", "surname", "phone", "email"];

/// Flat-file medium: one header row, one row per contact, rewritten in full
/// on every save.
#[derive(Debug, Clone)]
pub struct CsvStore {
    pub path: PathBuf,
}

impl CsvStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn write_rows(&self, tmp_path: &Path, contacts: &[Contact]) -> Result<(), AppError> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(tmp_path)?;

        writer.write_record(HEADERS)?;
        for contact in contacts {
            writer.serialize(contact)?;
        }

        let file = writer
            .into_inner()
            .map_err(|e| AppError::Io(io::Error::new(e.error().kind(), e.to_string())))?;
        file.sync_all()?;
        Ok(())
    }
}

impl ContactStore for CsvStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        // An unreadable file counts as an empty book
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                warn!("could not open {}: {}; starting empty", self.path.display(), e);
                return Ok(Vec::new());
            }
        };

        let mut reader = ReaderBuilder::new().from_reader(BufReader::new(file));

        let mut contacts: Vec<Contact> = Vec::new();
        for result in reader.deserialize::<Contact>() {
            match result {
                Ok(contact) => contacts.push(contact),
                Err(e) if e.is_io_error() => {
                    warn!("could not read {}: {}; starting empty", self.path.display(), e);
                    return Ok(Vec::new());
                }
                Err(e) => return Err(e.into()),
            }
        }

        info!("loaded {} contacts from {}", contacts.len(), self.path.display());
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        // Write beside the target, then rename over it
        let tmp_path = self.tmp_path();
        let written = self
            .write_rows(&tmp_path, contacts)
            .and_then(|()| fs::rename(&tmp_path, &self.path).map_err(AppError::from));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        info!("saved {} contacts to {}", contacts.len(), self.path.display());
        Ok(())
    }

    fn medium(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_contacts() -> Vec<Contact> {
        vec![
            Contact::new("Juan", "Alonso", "3644242523", "juan@ejemplo.com"),
            Contact::new("Pedro", "Araujo", "3644202542", ""),
            Contact::new("Ana, \"la jefa\"", "Ruiz", "1124202523", "ana@ruiz.com.ar"),
        ]
    }

    #[test]
    fn save_then_load_round_trips_in_order() -> Result<(), AppError> {
        let dir = tempdir()?;
        let store = CsvStore::new(&dir.path().join("contacts.csv"));

        assert!(store.load()?.is_empty());

        let contacts = sample_contacts();
        store.save(&contacts)?;

        assert_eq!(store.load()?, contacts);
        Ok(())
    }

    #[test]
    fn untrimmed_fields_survive_a_round_trip() -> Result<(), AppError> {
        let dir = tempdir()?;
        let store = CsvStore::new(&dir.path().join("contacts.csv"));

        let contacts = vec![Contact {
            name: " Ana".to_string(),
            surname: "Ruiz ".to_string(),
            phone: " 1124202523".to_string(),
            email: "".to_string(),
        }];
        store.save(&contacts)?;

        assert_eq!(store.load()?, contacts);
        Ok(())
    }

    #[test]
    fn save_writes_header_first_and_leaves_no_tmp_file() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("book").join("contacts.csv");
        let store = CsvStore::new(&path);

        store.save(&[])?;
        let data = fs::read_to_string(&path)?;
        assert_eq!(data, "name,surname,phone,email\n");

        store.save(&sample_contacts()[..1])?;
        let data = fs::read_to_string(&path)?;
        assert_eq!(
            data,
            "name,surname,phone,email\nJuan,Alonso,3644242523,juan@ejemplo.com\n"
        );
        assert!(!store.tmp_path().exists());
        Ok(())
    }

    #[test]
    fn loads_name_only_layout() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.csv");
        fs::write(&path, "name,phone,email\nJuan,3644242523,juan@ejemplo.com\n")?;

        let contacts = CsvStore::new(&path).load()?;
        assert_eq!(
            contacts,
            vec![Contact::new("Juan", "", "3644242523", "juan@ejemplo.com")]
        );
        Ok(())
    }

    #[test]
    fn malformed_row_is_an_error() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.csv");
        fs::write(&path, "name,surname,phone,email\nJuan,Alonso\n")?;

        assert!(matches!(CsvStore::new(&path).load(), Err(AppError::Csv(_))));
        Ok(())
    }

    #[test]
    fn unreadable_path_loads_empty_but_save_fails() -> Result<(), AppError> {
        let dir = tempdir()?;
        // A directory where the file should be
        let path = dir.path().join("contacts.csv");
        fs::create_dir(&path)?;

        let store = CsvStore::new(&path);
        assert!(store.load()?.is_empty());
        assert!(store.save(&sample_contacts()).is_err());
        assert!(!store.tmp_path().exists());
        Ok(())
    }
}
