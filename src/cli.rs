pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::contact::Contact;
use crate::errors::AppError;
use std::io::{self, Write};

// OUTPUT FUNCTIONS
pub fn confirm_action(action: &str) -> Result<(), AppError> {
    println!("\nAre you sure you want to {}? (y/n)", action);
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "Name: {}\n\
        Surname: {}\n\
        Phone: {}\n\
        Email: {}",
        contact.name, contact.surname, contact.phone, contact.email
    )
}

pub fn listing_row(i: usize, contact: &Contact) -> String {
    format!(
        "{i:>3}. {:<20} {:<20} {:15} {}",
        contact.name, contact.surname, contact.phone, contact.email
    )
}

// INPUT FUNCTIONS
pub fn get_input_to_lower() -> Result<String, AppError> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_listing_row() {
        let contact = Contact::new("Maria", "Lopez", "3624299523", "marial@ejemplo.com");

        assert_eq!(
            listing_row(4, &contact),
            "  4. Maria                Lopez                3624299523      marial@ejemplo.com"
        );
    }

    #[test]
    fn formats_contact_card() {
        let contact = Contact::new("Juan", "Alonso", "3644242523", "");

        assert_eq!(
            display_contact(&contact),
            "Name: Juan\nSurname: Alonso\nPhone: 3644242523\nEmail: "
        );
    }
}
