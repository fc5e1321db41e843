use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::name_and_phone;

/// `change <name> <new_phone>`: replaces the first phone, or adds one to a
/// contact that has none.
pub fn run(book: &mut AddressBook, args: &str) -> Result<CmdResult> {
    let (name, phone) = name_and_phone(args)?;
    let record = book.require_mut(name.as_str())?;

    if record.phones.is_empty() {
        record.add_phone(phone.clone());
    } else {
        record.change_phone(0, phone.clone())?;
    }

    let listed = vec![record.clone()];
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Changed phone <{}>, with name <{}>",
        phone, name
    )))
    .with_listed_records(listed)
    .modified())
}
