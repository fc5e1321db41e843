use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AddrBookError, Result};
use crate::model::Record;
use std::num::NonZeroUsize;

pub const EMPTY_BOOK: &str = "list of contacts is empty...";

/// `show all [n]`
///
/// Without a page size every contact is listed one per line. With one, each
/// page is rendered as `[line\nline]` and pages are separated by a space.
pub fn run(
    book: &AddressBook,
    args: &str,
    default_page_size: Option<NonZeroUsize>,
) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::message(CmdMessage::info(EMPTY_BOOK)));
    }

    let page_size = match args.split_whitespace().next() {
        Some(raw) => Some(parse_page_size(raw)?),
        None => default_page_size,
    };

    let text = match page_size {
        Some(size) => book
            .pages(size)
            .map(|page| format!("[{}]", summaries(page)))
            .collect::<Vec<_>>()
            .join(" "),
        None => summaries(book.records()),
    };

    Ok(CmdResult::message(CmdMessage::plain(text))
        .with_listed_records(book.records().to_vec()))
}

fn parse_page_size(raw: &str) -> Result<NonZeroUsize> {
    raw.parse()
        .map_err(|_| AddrBookError::InvalidPageSize(raw.to_string()))
}

fn summaries(records: &[Record]) -> String {
    records
        .iter()
        .map(Record::summary)
        .collect::<Vec<_>>()
        .join("\n")
}
