//! Interactive screens
//!
//! The menu tree the interactive mode walks through: Main (login/signup),
//! Login (pick an account role), and the per-client menu once a login
//! succeeds. Screens collect input over the console protocol and hand the
//! business work to the session service.

use std::io::{BufRead, Write};

use crate::display::client::format_client_details;
use crate::error::{CirculateError, CirculateResult};
use crate::models::ClientId;
use crate::services::session::{ProfileUpdate, SessionService, SignupInput};
use crate::storage::Storage;

use super::{Console, Menu};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainCommand {
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginCommand {
    Client,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClientCommand {
    DisplayInfo,
    EditInfo,
}

/// Run the main menu until the user exits
pub fn run_main_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
) -> CirculateResult<()> {
    let menu = Menu::new("**** Main Menu ****", "Exit")
        .item("Login", MainCommand::Login)
        .item("Signup", MainCommand::Signup);

    menu.run(console, |console, command| match command {
        MainCommand::Login => run_login_menu(console, storage),
        MainCommand::Signup => signup_flow(console, storage),
    })
}

fn run_login_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
) -> CirculateResult<()> {
    let menu = Menu::new("**** Login Menu ****", "Back").item("Client", LoginCommand::Client);

    menu.run(console, |console, command| match command {
        LoginCommand::Client => login_flow(console, storage),
    })
}

fn run_client_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
    id: ClientId,
) -> CirculateResult<()> {
    let menu = Menu::new("**** Client Menu ****", "Back")
        .item("Display Info", ClientCommand::DisplayInfo)
        .item("Edit Info", ClientCommand::EditInfo);

    menu.run(console, |console, command| match command {
        ClientCommand::DisplayInfo => display_flow(console, storage, id),
        ClientCommand::EditInfo => edit_flow(console, storage, id),
    })
}

fn signup_flow<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
) -> CirculateResult<()> {
    let name = console.prompt("Enter your name:")?;
    let password = console.prompt("Enter your password:")?;
    let phone_number = console.prompt("Enter your phone number:")?;

    let service = SessionService::new(storage);
    let client = service.signup(SignupInput {
        name,
        password,
        phone_number,
    })?;

    console.say(&format!("Successfully signed up! Your ID is: {}", client.id))
}

fn login_flow<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
) -> CirculateResult<()> {
    let id = console.prompt("Enter your ID:")?;
    let password = console.prompt("Enter your password:")?;

    let service = SessionService::new(storage);
    match service.login(&id, &password)? {
        Some(client) => run_client_menu(console, storage, client.id),
        None => console.say("Invalid ID or Password combination. Please try again."),
    }
}

fn display_flow<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
    id: ClientId,
) -> CirculateResult<()> {
    let service = SessionService::new(storage);
    // Re-read on every visit: an edit in this session must show up here
    let client = service
        .get(id)?
        .ok_or_else(|| CirculateError::client_not_found(id.to_string()))?;

    console.say(&format_client_details(&client))
}

fn edit_flow<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    storage: &Storage,
    id: ClientId,
) -> CirculateResult<()> {
    let answer = console.prompt("Are you sure?(y/n)")?;
    if answer != "y" && answer != "Y" {
        return Ok(());
    }

    let name = console.prompt("Enter new name:")?;
    let password = console.prompt("Enter new password:")?;
    let phone_number = console.prompt("Enter new phone number:")?;

    let service = SessionService::new(storage);
    service.update_profile(
        id,
        ProfileUpdate {
            name,
            password,
            phone_number,
        },
    )?;

    console.say("Client information updated successfully!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::CirculatePaths;
    use crate::config::settings::Settings;
    use crate::models::Client;
    use crate::services::session::SessionService;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CirculatePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn run_session(storage: &Storage, script: &str) -> String {
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        run_main_menu(&mut console, storage).unwrap();
        let (_, output) = console.into_parts();
        String::from_utf8(output).unwrap()
    }

    fn signup_ann(storage: &Storage) -> Client {
        SessionService::new(storage)
            .signup(crate::services::session::SignupInput {
                name: "Ann".to_string(),
                password: "p1".to_string(),
                phone_number: "555-1234".to_string(),
            })
            .unwrap()
    }

    #[test]
    fn test_signup_from_the_menu() {
        let (_temp_dir, storage) = create_test_storage();

        // 2 = Signup, then the three fields, then 0 = Exit
        let output = run_session(&storage, "2\nAnn\np1\n555-1234\n0\n");

        assert!(output.contains("**** Main Menu ****"));
        assert!(output.contains("Enter your name:"));
        assert!(output.contains("Enter your password:"));
        assert!(output.contains("Enter your phone number:"));
        assert!(output.contains("Successfully signed up! Your ID is: "));

        let all = storage.clients.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Ann");
        assert_eq!(all[0].password, "p1");
        assert_eq!(all[0].phone_number, "555-1234");
    }

    #[test]
    fn test_login_and_display_info() {
        let (_temp_dir, storage) = create_test_storage();
        let mut ann = signup_ann(&storage);
        ann.rent("Dune");
        storage.clients.upsert(ann.clone()).unwrap();

        // 1 = Login, 1 = Client, credentials, 1 = Display Info, then back out
        let script = format!("1\n1\n{}\np1\n1\n0\n0\n0\n", ann.id);
        let output = run_session(&storage, &script);

        assert!(output.contains("**** Login Menu ****"));
        assert!(output.contains("Enter your ID:"));
        assert!(output.contains("**** Client Menu ****"));
        assert!(output.contains(&format!("ID: {}", ann.id)));
        assert!(output.contains("Name: Ann"));
        assert!(output.contains("Phone number: 555-1234"));
        assert!(output.contains("Rented books:"));
        assert!(output.contains("- Dune"));
        // The password is never displayed
        assert!(!output.contains("p1"));
    }

    #[test]
    fn test_login_with_bad_credentials() {
        let (_temp_dir, storage) = create_test_storage();
        let ann = signup_ann(&storage);

        let script = format!("1\n1\n{}\nwrong\n0\n0\n", ann.id);
        let output = run_session(&storage, &script);

        assert!(output.contains("Invalid ID or Password combination. Please try again."));
        assert!(!output.contains("**** Client Menu ****"));
    }

    #[test]
    fn test_edit_info_commits_and_shows_fresh_data() {
        let (_temp_dir, storage) = create_test_storage();
        let ann = signup_ann(&storage);

        // Login, edit with confirmation, then display
        let script = format!(
            "1\n1\n{}\np1\n2\ny\nAnna\np9\n555-0000\n1\n0\n0\n0\n",
            ann.id
        );
        let output = run_session(&storage, &script);

        assert!(output.contains("Are you sure?(y/n)"));
        assert!(output.contains("Enter new name:"));
        assert!(output.contains("Client information updated successfully!"));
        // The display that followed the edit shows the new values
        assert!(output.contains("Name: Anna"));
        assert!(output.contains("Phone number: 555-0000"));

        let stored = storage.clients.get(ann.id).unwrap().unwrap();
        assert_eq!(stored.name, "Anna");
        assert_eq!(stored.password, "p9");
    }

    #[test]
    fn test_edit_info_declined_changes_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let ann = signup_ann(&storage);

        let script = format!("1\n1\n{}\np1\n2\nn\n0\n0\n0\n", ann.id);
        let output = run_session(&storage, &script);

        assert!(output.contains("Are you sure?(y/n)"));
        assert!(!output.contains("Enter new name:"));

        let stored = storage.clients.get(ann.id).unwrap().unwrap();
        assert_eq!(stored.name, "Ann");
    }

    #[test]
    fn test_invalid_menu_choice_reprompts() {
        let (_temp_dir, storage) = create_test_storage();

        let output = run_session(&storage, "7\nhello\n0\n");
        assert_eq!(output.matches("Not valid input!").count(), 2);
        // The menu re-rendered after each bad answer
        assert_eq!(output.matches("**** Main Menu ****").count(), 3);
    }

    #[test]
    fn test_signup_failure_keeps_the_menu_alive() {
        let (_temp_dir, storage) = create_test_storage();

        // Point the ledger path at a directory so the append fails
        std::fs::create_dir_all(storage.clients.path()).unwrap();

        let output = run_session(&storage, "2\nAnn\np1\n555-1234\n0\n");
        assert!(output.contains("Error: "));
        // Back at the main menu afterwards
        assert!(output.matches("**** Main Menu ****").count() >= 2);
    }
}
