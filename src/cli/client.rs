//! Client CLI commands
//!
//! Implements CLI commands for working with client records outside the
//! interactive menu.

use clap::Subcommand;

use crate::display::client::{format_client_details, format_client_list};
use crate::error::CirculateResult;
use crate::services::session::{SessionService, SignupInput};
use crate::storage::Storage;

/// Client subcommands
#[derive(Subcommand)]
pub enum ClientCommands {
    /// List all clients in the ledger
    List,
    /// Show one client's details
    Show {
        /// Client name or ID
        client: String,
    },
    /// Register a new client without going through the menu
    Add {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Password the client will log in with
        #[arg(short, long)]
        password: String,
        /// Contact phone number
        #[arg(long)]
        phone: String,
    },
}

/// Handle a client command
pub fn handle_client_command(storage: &Storage, cmd: ClientCommands) -> CirculateResult<()> {
    let service = SessionService::new(storage);

    match cmd {
        ClientCommands::List => {
            let clients = storage.clients.get_all()?;
            print!("{}", format_client_list(&clients));
        }

        ClientCommands::Show { client } => {
            let found = service
                .find(&client)?
                .ok_or_else(|| crate::error::CirculateError::client_not_found(&client))?;

            println!("{}", format_client_details(&found));
        }

        ClientCommands::Add {
            name,
            password,
            phone,
        } => {
            let client = service.signup(SignupInput {
                name,
                password,
                phone_number: phone,
            })?;

            println!("Registered client: {}", client.name);
            println!("  Phone: {}", client.phone_number);
            println!("  ID: {}", client.id);
        }
    }

    Ok(())
}
