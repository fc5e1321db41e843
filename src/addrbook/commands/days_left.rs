use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use chrono::NaiveDate;

use super::helpers::name_arg;

/// `days left <name>`, counted from `today`.
pub fn run(book: &AddressBook, args: &str, today: NaiveDate) -> Result<CmdResult> {
    let record = book.require(name_arg(args)?)?;
    let text = match record.days_to_birthday(today) {
        None => "Not indicated".to_string(),
        Some(0) => "Happy birthday today".to_string(),
        Some(days) => format!("Days left: {}", days),
    };
    Ok(CmdResult::message(CmdMessage::plain(text)))
}
