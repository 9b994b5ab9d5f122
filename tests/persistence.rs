use contact_book::prelude::*;
use std::fs;
use tempfile::tempdir;

fn csv_book(path: &std::path::Path) -> ContactBook {
    ContactBook::open(Box::new(CsvStore::new(path)), IdentityScheme::NameSurname).unwrap()
}

#[test]
fn every_mutation_is_written_through() -> Result<(), AppError> {
    let dir = tempdir()?;
    let path = dir.path().join(".instance").join("contacts.csv");

    let mut book = csv_book(&path);
    assert!(book.is_empty());
    assert_eq!(book.medium(), "csv");

    book.add(Contact::new("Juan", "Alonso", "3644242523", "juan@ejemplo.com"))?;
    book.add(Contact::new("Maria", "Lopez", "3624299523", "marial@ejemplo.com"))?;
    assert_eq!(CsvStore::new(&path).load()?, book.list_all());

    book.add(Contact::new("juan", "alonso", "999", "new@x.com"))?;
    let reloaded = CsvStore::new(&path).load()?;
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded[0].phone, "999");

    book.delete("MARIA", "lopez")?;
    assert_eq!(CsvStore::new(&path).load()?.len(), 1);

    // No temp file left next to the book
    let names: Vec<_> = fs::read_dir(dir.path().join(".instance"))?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect::<Result<_, _>>()?;
    assert_eq!(names, vec![std::ffi::OsString::from("contacts.csv")]);
    Ok(())
}

#[test]
fn reopening_reproduces_the_same_records() -> Result<(), AppError> {
    let dir = tempdir()?;
    let path = dir.path().join("contacts.csv");

    let contacts = vec![
        Contact::new("Juan", "Alonso", "3644242523", "juan@ejemplo.com"),
        Contact::new("Pedro", "Araujo", "3644202542", "pedrito@hotmail.com"),
        Contact::new("Juana", "Araujo", "1124202523", ""),
        Contact::new("Maria José", "López, hija", "3624299523", "marial@ejemplo.com"),
    ];

    let mut book = csv_book(&path);
    for contact in contacts.clone() {
        book.add(contact)?;
    }

    let reopened = csv_book(&path);
    assert_eq!(reopened.list_all(), contacts.as_slice());
    Ok(())
}

#[test]
fn rejected_add_does_not_touch_the_file() -> Result<(), AppError> {
    let dir = tempdir()?;
    let path = dir.path().join("contacts.csv");

    let mut book = csv_book(&path);
    assert!(book.add(Contact::new("Juan", "Alonso", "3644242523", "bad-email")).is_err());
    assert!(!path.exists());

    assert!(book.delete("Nobody", "Nowhere")?.is_none());
    assert!(!path.exists());
    Ok(())
}

#[test]
fn failed_save_is_surfaced() -> Result<(), AppError> {
    let dir = tempdir()?;
    let path = dir.path().join("contacts.csv");
    fs::create_dir(&path)?;

    let mut book = csv_book(&path);
    let err = book.add(Contact::new("Juan", "Alonso", "3644242523", ""));
    assert!(matches!(err, Err(AppError::Io(_))));
    Ok(())
}
