//! Client display formatting
//!
//! Formats client records for terminal output in table and detail views.

use crate::models::Client;

/// Format a list of clients as a table
pub fn format_client_list(clients: &[Client]) -> String {
    if clients.is_empty() {
        return "No clients found.".to_string();
    }

    // Calculate column widths; the rendered ID is always 36 characters
    let name_width = clients
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let phone_width = clients
        .iter()
        .map(|c| c.phone_number.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let id_width = 36;

    // Build header
    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<id_width$}  {:<phone_width$}  {:>5}\n",
        "Name",
        "ID",
        "Phone",
        "Books",
        name_width = name_width,
        id_width = id_width,
        phone_width = phone_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:-<name_width$}  {:-<id_width$}  {:-<phone_width$}  {:->5}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        id_width = id_width,
        phone_width = phone_width,
    ));

    // Client rows
    for client in clients {
        output.push_str(&format!(
            "{:<name_width$}  {:<id_width$}  {:<phone_width$}  {:>5}\n",
            client.name,
            client.id.to_string(),
            client.phone_number,
            client.rented_books.len(),
            name_width = name_width,
            id_width = id_width,
            phone_width = phone_width,
        ));
    }

    output
}

/// Format a single client's details (the profile view)
///
/// The password is deliberately absent.
pub fn format_client_details(client: &Client) -> String {
    let mut output = String::new();

    output.push_str(&format!("ID: {}\n", client.id));
    output.push_str(&format!("Name: {}\n", client.name));
    output.push_str(&format!("Phone number: {}\n", client.phone_number));
    output.push_str("Rented books:");

    for title in &client.rented_books {
        output.push_str(&format!("\n- {}", title));
    }

    output
}
