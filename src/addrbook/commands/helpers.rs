use crate::error::{AddrBookError, Result};
use crate::model::{Name, Phone};

/// Whole argument text as a contact name, for commands that take only a name.
pub fn name_arg(args: &str) -> Result<&str> {
    let name = args.trim();
    if name.is_empty() {
        return Err(AddrBookError::MissingArguments("a name"));
    }
    Ok(name)
}

/// `<name> <phone>` as the first two words.
pub fn name_and_phone(args: &str) -> Result<(Name, Phone)> {
    let mut words = args.split_whitespace();
    match (words.next(), words.next()) {
        (Some(name), Some(phone)) => Ok((Name::new(name)?, Phone::new(phone)?)),
        _ => Err(AddrBookError::MissingArguments("a name and phone")),
    }
}
