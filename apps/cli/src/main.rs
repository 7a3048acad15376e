use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::{load_settings, ContactBook, LoadState};
use shared::domain::{Contact, ContactDraft, ContactId};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "agenda", about = "Manage contacts in a remote agenda")]
struct Cli {
    /// Override the remote service base URL.
    #[arg(long)]
    base_url: Option<String>,
    /// Override the agenda slug.
    #[arg(long)]
    slug: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all contacts in the agenda.
    List,
    /// Show one contact from the loaded list.
    Show { id: i64 },
    /// Create a new contact.
    Add {
        name: String,
        email: String,
        phone: String,
        address: String,
    },
    /// Replace all fields of an existing contact.
    Edit {
        id: i64,
        name: String,
        email: String,
        phone: String,
        address: String,
    },
    /// Delete a contact by id.
    Remove { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    let mut settings = load_settings();
    if let Some(v) = cli.base_url {
        settings.base_url = v;
    }
    if let Some(v) = cli.slug {
        settings.agenda_slug = v;
    }

    let mut book = ContactBook::new(&settings);

    match cli.command {
        Command::List => {
            // Read flow: render the tri-state inline instead of bailing.
            let _ = book.refresh().await;
            render_list(&book);
            if !matches!(book.load_state(), LoadState::Ready) {
                std::process::exit(1);
            }
        }
        Command::Show { id } => {
            book.refresh().await?;
            match book.state().contact(ContactId(id)) {
                Some(contact) => render_contact(contact),
                None => {
                    eprintln!("contact {id} not found in agenda '{}'", settings.agenda_slug);
                    std::process::exit(1);
                }
            }
        }
        Command::Add {
            name,
            email,
            phone,
            address,
        } => {
            let created = book
                .create(ContactDraft {
                    name,
                    email,
                    phone,
                    address,
                })
                .await?;
            println!("created contact id={}", created.id.0);
        }
        Command::Edit {
            id,
            name,
            email,
            phone,
            address,
        } => {
            // Edits resolve against the loaded list first; the service has
            // no single-contact read.
            book.refresh().await?;
            let updated = book
                .update(
                    ContactId(id),
                    ContactDraft {
                        name,
                        email,
                        phone,
                        address,
                    },
                )
                .await?;
            println!("updated contact id={}", updated.id.0);
        }
        Command::Remove { id } => {
            book.delete(ContactId(id)).await?;
            println!("deleted contact id={id}");
        }
    }

    Ok(())
}

fn render_list(book: &ContactBook) {
    match book.load_state() {
        LoadState::Loading => println!("Loading contacts..."),
        LoadState::Failed(msg) => println!("Error loading contacts: {msg}"),
        LoadState::Ready => {
            if book.contacts().is_empty() {
                println!("No contacts found for this agenda. Add one!");
            } else {
                for contact in book.contacts() {
                    println!(
                        "{:>5}  {}  <{}>  {}  {}",
                        contact.id.0, contact.name, contact.email, contact.phone, contact.address
                    );
                }
            }
        }
    }
}

fn render_contact(contact: &Contact) {
    println!("id:      {}", contact.id.0);
    println!("name:    {}", contact.name);
    println!("email:   {}", contact.email);
    println!("phone:   {}", contact.phone);
    println!("address: {}", contact.address);
}
