use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AddrBookError, Result};
use crate::model::Birthday;

/// `set birthday <name> <DD.MM.YYYY>`
pub fn run(book: &mut AddressBook, args: &str) -> Result<CmdResult> {
    let mut words = args.split_whitespace();
    let (name, raw) = match (words.next(), words.next()) {
        (Some(name), Some(raw)) => (name, raw),
        _ => return Err(AddrBookError::MissingArguments("a name and birthday")),
    };
    let birthday: Birthday = raw.parse()?;
    let record = book.require_mut(name)?;
    record.add_birthday(birthday);

    let listed = vec![record.clone()];
    Ok(CmdResult::message(CmdMessage::success(format!(
        "Birthday of <{}> set to {}",
        name, birthday
    )))
    .with_listed_records(listed)
    .modified())
}
