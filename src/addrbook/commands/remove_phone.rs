use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::name_and_phone;

/// `remove phone <name> <phone>`
pub fn run(book: &mut AddressBook, args: &str) -> Result<CmdResult> {
    let (name, phone) = name_and_phone(args)?;
    let record = book.require_mut(name.as_str())?;
    record.delete_phone(&phone)?;

    let listed = vec![record.clone()];
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Removed phone <{}> from <{}>",
        phone, name
    )))
    .with_listed_records(listed)
    .modified())
}
