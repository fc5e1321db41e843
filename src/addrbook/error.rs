use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddrBookError {
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("{0} is already in contacts")]
    ContactExists(String),

    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("Invalid birthday (expected DD.MM.YYYY): {0}")]
    InvalidBirthday(String),

    #[error("Missing arguments: {0}")]
    MissingArguments(&'static str),

    #[error("Invalid page size: {0}")]
    InvalidPageSize(String),

    #[error("{name} has no phone {phone}")]
    PhoneNotFound { name: String, phone: String },

    #[error("{name} has no phone at position {index}")]
    PhoneIndexOutOfRange { name: String, index: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl AddrBookError {
    /// True for mistakes in what the user typed. These are reported and the
    /// session goes on; everything else is fatal.
    pub fn is_input_error(&self) -> bool {
        !matches!(
            self,
            AddrBookError::Io(_) | AddrBookError::Serialization(_) | AddrBookError::Config(_)
        )
    }

    /// The short phrase shown to the user at the prompt.
    pub fn user_message(&self) -> String {
        match self {
            AddrBookError::ContactNotFound(_) => "There is no contact with that name".to_string(),
            AddrBookError::InvalidPhone(_) => "Number is incorrect".to_string(),
            AddrBookError::InvalidBirthday(_) => "Wrong format".to_string(),
            AddrBookError::MissingArguments(what) => format!("Give me {} please", what),
            AddrBookError::InvalidPageSize(_) => "Number is incorrect".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AddrBookError>;
