use anyhow::Result;
use clap::{Parser, Subcommand};

use circulate::cli::{handle_audit_command, handle_client_command};
use circulate::config::{paths::CirculatePaths, settings::Settings};
use circulate::menu;
use circulate::storage::Storage;

#[derive(Parser)]
#[command(
    name = "circulate",
    version,
    about = "Terminal-based client management for small lending libraries",
    long_about = "Circulate keeps a flat-text ledger of library clients. Members \
                  sign up, log in, and maintain their own records through an \
                  interactive numbered menu, and every account operation is \
                  recorded in an audit log."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default when no command is given)
    Menu,

    /// Client management commands
    #[command(subcommand)]
    Client(circulate::cli::ClientCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data directory and write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = CirculatePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone(), &settings)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Menu) | None => {
            let mut console = menu::console::stdio();
            menu::screens::run_main_menu(&mut console, &storage)?;
        }
        Some(Commands::Client(cmd)) => {
            handle_client_command(&storage, cmd)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&storage, limit)?;
        }
        Some(Commands::Init) => {
            println!("Initializing circulate at: {}", paths.data_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Ledger file: {}", storage.clients.path().display());
            println!("Run 'circulate' to open the interactive menu.");
        }
        Some(Commands::Config) => {
            println!("Circulate Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Ledger file: {}", storage.clients.path().display());
            println!("Audit log:   {}", storage.audit().path().display());
            println!();
            println!("Clients on record: {}", storage.clients.count()?);
        }
    }

    Ok(())
}
