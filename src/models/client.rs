//! Client model
//!
//! Represents a registered client of the lending desk, together with the
//! titles they currently have out.

use std::fmt;

use super::ids::ClientId;

/// A registered client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    /// Unique identifier, generated at signup
    pub id: ClientId,

    /// Display name
    pub name: String,

    /// Plain-text credential checked at login
    pub password: String,

    /// Contact phone number
    pub phone_number: String,

    /// Titles currently rented, in the order they were taken out
    pub rented_books: Vec<String>,
}

impl Client {
    /// Create a new client with a freshly generated ID and no rentals
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id: ClientId::new(),
            name: name.into(),
            password: password.into(),
            phone_number: phone_number.into(),
            rented_books: Vec::new(),
        }
    }

    /// Record a rented title
    pub fn rent(&mut self, title: impl Into<String>) {
        self.rented_books.push(title.into());
    }

    /// Validate the client record
    ///
    /// The ledger format is line-oriented, so no field may contain a line
    /// break. The nil ID is reserved as an invalid sentinel.
    pub fn validate(&self) -> Result<(), ClientValidationError> {
        if self.id.is_nil() {
            return Err(ClientValidationError::NilId);
        }

        for (field, value) in [
            ("name", &self.name),
            ("password", &self.password),
            ("phone_number", &self.phone_number),
        ] {
            if value.contains(['\n', '\r']) {
                return Err(ClientValidationError::EmbeddedLineBreak(field));
            }
        }

        for title in &self.rented_books {
            if title.contains(['\n', '\r']) {
                return Err(ClientValidationError::EmbeddedLineBreak("rented_books"));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientValidationError {
    NilId,
    EmbeddedLineBreak(&'static str),
}

impl fmt::Display for ClientValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NilId => write!(f, "Client ID cannot be nil"),
            Self::EmbeddedLineBreak(field) => {
                write!(f, "Client {} cannot contain line breaks", field)
            }
        }
    }
}

impl std::error::Error for ClientValidationError {}
