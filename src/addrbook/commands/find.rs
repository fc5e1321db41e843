use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;

/// `find <text>`
pub fn run(book: &AddressBook, args: &str) -> Result<CmdResult> {
    let pattern = args.trim();
    if pattern.is_empty() {
        return Ok(CmdResult::message(CmdMessage::warning("Enter one parameter")));
    }

    let found: Vec<Record> = book.find(pattern).into_iter().cloned().collect();
    if found.is_empty() {
        return Ok(CmdResult::message(CmdMessage::info("No matches found")));
    }

    let text = found
        .iter()
        .map(Record::summary)
        .collect::<Vec<_>>()
        .join("\n");
    Ok(CmdResult::message(CmdMessage::plain(text)).with_listed_records(found))
}
