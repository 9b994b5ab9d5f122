use crate::{
    cli::{confirm_action, display_contact, get_input_to_lower, listing_row},
    config::Config,
    logging,
    prelude::{
        AppError, Contact, ContactBook, ContactDirectory, Upsert,
        command::{Cli, Commands},
        parse_storage_type,
    },
};
use clap::Parser;
use dotenv::dotenv;
use log::debug;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    let config = Config::from_cli(&cli)?;
    logging::init_logging(&config.log_level)?;
    debug!("resolved config: {:?}", config);

    let mut book = ContactBook::open(parse_storage_type(&config), config.identity)?;

    match cli.command {
        Commands::Add {
            name,
            surname,
            phone,
            email,
        } => {
            let contact = Contact::new(
                &name,
                &surname.unwrap_or_default(),
                &phone,
                &email.unwrap_or_default(),
            );

            match book.add(contact)? {
                Upsert::Created => println!("Contact added successfully"),
                Upsert::Updated => println!("Contact updated successfully"),
            }
            Ok(())
        }

        Commands::Find { name, surname } => {
            match book.find_one(&name, &surname.unwrap_or_default()) {
                Some(contact) => println!("{}", display_contact(contact)),
                None => eprintln!("{}", AppError::NotFound("Contact".to_string())),
            }
            Ok(())
        }

        Commands::Search { query } => {
            if book.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            let outcome = book.filter(&query.unwrap_or_default());
            if outcome.is_no_matches() {
                println!("No matching contact");
                return Ok(());
            }

            for (i, c) in outcome.records().iter().enumerate() {
                println!("{}", listing_row(i + 1, c));
            }
            Ok(())
        }

        Commands::List { sort, reverse } => {
            if book.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            let contacts: Vec<&Contact> = match sort {
                Some(key) => book.sorted(key.into(), reverse),
                None if reverse => book.list_all().iter().rev().collect(),
                None => book.list_all().iter().collect(),
            };

            for (i, c) in contacts.iter().enumerate() {
                println!("{}", listing_row(i + 1, c));
            }
            Ok(())
        }

        Commands::Delete { name, surname, yes } => {
            let surname = surname.unwrap_or_default();

            let Some(contact) = book.find_one(&name, &surname) else {
                eprintln!("{}", AppError::NotFound("Contact".to_string()));
                return Ok(());
            };

            if !yes {
                confirm_action(&format!("delete {}", contact.full_name()))?;
                if get_input_to_lower()? != "y" {
                    println!("Delete cancelled");
                    return Ok(());
                }
            }

            book.delete(&name, &surname)?;
            println!("Contact deleted successfully");
            Ok(())
        }
    }
}
