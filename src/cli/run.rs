use std::io::{self, Write};

use clap::Parser;
use dotenv::dotenv;
use flexi_logger::{Logger, LoggerHandle};
use log::{info, warn};

use crate::{
    domain::{Contact, ContactPriority, ContactStatus},
    errors::AppError,
    prelude::command::{Cli, MenuChoice},
    store::{ContactFilter, MemStore},
    validation::validate_required,
};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();
    let _logger = init_logger()?;

    let mut store = MemStore::new();
    if cli.demo {
        seed_demo(&mut store);
    }

    info!("session started");
    println!("\n--- CONTACT DESK ---");

    loop {
        show_menu()?;

        let Some(input) = get_input()? else {
            break;
        };

        match input.parse::<MenuChoice>() {
            Ok(choice) => match choice {
                MenuChoice::Add => add_contact(&mut store)?,
                MenuChoice::List => list_contacts(&store),
                MenuChoice::Edit => edit_contact(&mut store)?,
                MenuChoice::Delete => delete_contact(&mut store, cli.assume_yes)?,
                MenuChoice::Filter => filter_contacts(&store)?,
                MenuChoice::Stats => show_stats(&store),
                MenuChoice::Export => export_json(&store)?,
                MenuChoice::Exit => break,
            },
            Err(e) => {
                // Bad menu input never ends the session
                eprintln!("{e}");
            }
        }
    }

    println!("\nBye!");
    Ok(())
}

fn init_logger() -> Result<LoggerHandle, AppError> {
    let handle = Logger::try_with_env_or_str("warn")?.start()?;
    Ok(handle)
}

fn seed_demo(store: &mut MemStore) {
    let samples = [
        (
            "Ada Lovelace",
            "ada@example.com",
            "+447911123456",
            ContactStatus::Pending,
            ContactPriority::Urgent,
        ),
        (
            "Grace Hopper",
            "grace@example.com",
            "+12025550143",
            ContactStatus::Completed,
            ContactPriority::Normal,
        ),
        (
            "Alan Turing",
            "alan@example.com",
            "+447911123457",
            ContactStatus::Pending,
            ContactPriority::Important,
        ),
    ];

    for (name, email, phone, status, priority) in samples {
        let contact = Contact::new(
            name.to_string(),
            email.to_string(),
            phone.to_string(),
            status,
            priority,
        );
        if let Err(e) = store.add(contact) {
            warn!("skipping demo contact {name}: {e}");
        }
    }
}

// MENU AND OUTPUT

fn show_menu() -> Result<(), AppError> {
    println!("\n");
    println!("1. Add contact");
    println!("2. List contacts");
    println!("3. Edit contact");
    println!("4. Delete contact");
    println!("5. Filter contacts");
    println!("6. Stats");
    println!("7. Export JSON");
    println!("8. Exit");
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

fn listing_row(position: usize, contact: &Contact) -> String {
    format!(
        "{position:>3}. {:<20} {:^30} {:15} {:<10} {:<10}",
        contact.full_name,
        contact.email,
        contact.phone,
        contact.status.as_str(),
        contact.priority.as_str()
    )
}

fn print_rows(contacts: &[&Contact]) {
    for (i, contact) in contacts.iter().enumerate() {
        println!("{}", listing_row(i + 1, contact));
    }
}

// INPUT

/// Reads one trimmed line. `None` means the session's stdin reached EOF.
fn get_input() -> Result<Option<String>, AppError> {
    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Prompts for a single value. `None` means the user backed out with `*`
/// or stdin ended.
fn prompt(label: &str) -> Result<Option<String>, AppError> {
    print!("{label} (* to go back): ");
    io::stdout().flush()?;

    match get_input()? {
        None => Ok(None),
        Some(input) if input == "*" => Ok(None),
        Some(input) => Ok(Some(input)),
    }
}

fn prompt_required(label: &str) -> Result<Option<String>, AppError> {
    loop {
        let Some(input) = prompt(label)? else {
            return Ok(None);
        };

        if validate_required(&input) {
            return Ok(Some(input));
        }
        eprintln!("{}", AppError::Validation(format!("{label} is required")));
    }
}

fn prompt_status(default: ContactStatus) -> Result<Option<ContactStatus>, AppError> {
    loop {
        let label = format!("Status [pending/completed] (default {})", default.as_str());
        let Some(input) = prompt(&label)? else {
            return Ok(None);
        };

        if input.is_empty() {
            return Ok(Some(default));
        }
        match input.parse::<ContactStatus>() {
            Ok(status) => return Ok(Some(status)),
            Err(e) => eprintln!("{e}"),
        }
    }
}

fn prompt_priority(default: ContactPriority) -> Result<Option<ContactPriority>, AppError> {
    loop {
        let label = format!(
            "Priority [urgent/important/normal] (default {})",
            default.as_str()
        );
        let Some(input) = prompt(&label)? else {
            return Ok(None);
        };

        if input.is_empty() {
            return Ok(Some(default));
        }
        match input.parse::<ContactPriority>() {
            Ok(priority) => return Ok(Some(priority)),
            Err(e) => eprintln!("{e}"),
        }
    }
}

/// Lists the store and asks for a 1-based position. `None` on back-out.
fn prompt_position(store: &MemStore, verb: &str) -> Result<Option<usize>, AppError> {
    let contacts: Vec<&Contact> = store.iter().collect();
    print_rows(&contacts);

    loop {
        let label = format!("Contact number to {verb}");
        let Some(input) = prompt(&label)? else {
            return Ok(None);
        };

        let position = match input.parse::<usize>() {
            Ok(n) => n,
            Err(e) => {
                eprintln!("{}", AppError::ParseInt(e));
                continue;
            }
        };

        if position >= 1 && position <= contacts.len() {
            return Ok(Some(position - 1));
        }
        eprintln!("{}", AppError::NotFound("Contact".to_string()));
    }
}

// COMMAND HANDLERS

fn add_contact(store: &mut MemStore) -> Result<(), AppError> {
    let Some(full_name) = prompt_required("Full name")? else {
        return Ok(());
    };
    let Some(email) = prompt_required("Email")? else {
        return Ok(());
    };
    let Some(phone) = prompt_required("Phone")? else {
        return Ok(());
    };
    let Some(status) = prompt_status(ContactStatus::Pending)? else {
        return Ok(());
    };
    let Some(priority) = prompt_priority(ContactPriority::Normal)? else {
        return Ok(());
    };

    let contact = Contact::new(full_name, email, phone, status, priority);

    match store.add(contact) {
        Ok(()) => println!("Contact added successfully"),
        Err(e) => eprintln!("{e}"),
    }
    Ok(())
}

fn list_contacts(store: &MemStore) {
    if store.list().is_empty() {
        println!("No contacts yet");
        return;
    }

    let contacts: Vec<&Contact> = store.iter().collect();
    print_rows(&contacts);
}

fn edit_contact(store: &mut MemStore) -> Result<(), AppError> {
    if store.list().is_empty() {
        println!("No contacts yet");
        return Ok(());
    }

    let Some(index) = prompt_position(store, "edit")? else {
        return Ok(());
    };
    let current = store.list()[index].clone();

    println!("Editing {} (blank keeps the current value)", current.full_name);

    let Some(full_name) = prompt(&format!("Full name [{}]", current.full_name))? else {
        return Ok(());
    };
    let Some(email) = prompt(&format!("Email [{}]", current.email))? else {
        return Ok(());
    };
    let Some(phone) = prompt(&format!("Phone [{}]", current.phone))? else {
        return Ok(());
    };
    let Some(status) = prompt_status(current.status)? else {
        return Ok(());
    };
    let Some(priority) = prompt_priority(current.priority)? else {
        return Ok(());
    };

    let replacement = Contact {
        id: current.id,
        full_name: if full_name.is_empty() {
            current.full_name
        } else {
            full_name
        },
        email: if email.is_empty() { current.email } else { email },
        phone: if phone.is_empty() { current.phone } else { phone },
        status,
        priority,
        created_at: current.created_at,
    };

    match store.edit(replacement) {
        Ok(()) => println!("Contact updated successfully"),
        Err(e) => eprintln!("{e}"),
    }
    Ok(())
}

fn delete_contact(store: &mut MemStore, assume_yes: bool) -> Result<(), AppError> {
    if store.list().is_empty() {
        println!("No contacts yet");
        return Ok(());
    }

    let Some(index) = prompt_position(store, "delete")? else {
        return Ok(());
    };
    let contact = &store.list()[index];
    let id = contact.id;

    if !assume_yes {
        println!(
            "Are you sure you want to delete {}? (y/n)",
            contact.full_name
        );
        print!("> ");
        io::stdout().flush()?;

        let consent = get_input()?.unwrap_or_default().to_lowercase();
        if consent != "y" {
            println!("Delete cancelled");
            return Ok(());
        }
    }

    store.remove(&id);
    println!("Contact deleted successfully");
    Ok(())
}

fn filter_contacts(store: &MemStore) -> Result<(), AppError> {
    let filter = loop {
        let Some(input) = prompt("Filter [all/pending/completed/urgent/important/normal]")? else {
            return Ok(());
        };

        match input.parse::<ContactFilter>() {
            Ok(filter) => break filter,
            Err(e) => eprintln!("{e}"),
        }
    };

    let matches = store.filter(filter);
    if matches.is_empty() {
        println!("No contacts match this filter");
        return Ok(());
    }
    print_rows(&matches);
    Ok(())
}

fn show_stats(store: &MemStore) {
    let stats = store.stats();

    println!("Total contacts: {}", stats.total);
    println!("Pending:        {}", stats.pending);
    println!("Completed:      {}", stats.completed);
    println!("Urgent:         {}", stats.urgent);
    println!("Important:      {}", stats.important);
}

fn export_json(store: &MemStore) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(store.list())?;
    println!("{json}");
    Ok(())
}
