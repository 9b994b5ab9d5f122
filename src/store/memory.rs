use super::*;

/// Session-only medium. `load` hands back the seed, `save` keeps nothing.
#[derive(Debug, Default)]
pub struct MemStore {
    pub data: Vec<Contact>,
}

impl MemStore {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_contacts(data: Vec<Contact>) -> Self {
        Self { data }
    }
}

/// The book a fresh `mem` session starts with.
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact::new("Juan", "Alonso", "3644242523", "juan@ejemplo.com"),
        Contact::new("Pedro", "Araujo", "3644202542", "pedrito@hotmail.com"),
        Contact::new("Juana", "Araujo", "1124202523", "juanaaraujo@gmail.com"),
        Contact::new("Maria", "Lopez", "3624299523", "marial@ejemplo.com"),
        Contact::new("Susana", "Diaz", "1144212323", "susana@gmail.com"),
    ]
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.clone())
    }

    fn save(&self, _contacts: &[Contact]) -> Result<(), AppError> {
        Ok(())
    }

    fn medium(&self) -> &str {
        "mem"
    }
}
