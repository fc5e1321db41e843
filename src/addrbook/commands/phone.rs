use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::name_arg;

/// `phone <name>`: the contact's summary line.
pub fn run(book: &AddressBook, args: &str) -> Result<CmdResult> {
    let record = book.require(name_arg(args)?)?;
    Ok(CmdResult::message(CmdMessage::plain(record.summary()))
        .with_listed_records(vec![record.clone()]))
}
