use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Birthday, Record};

use super::helpers::name_and_phone;

/// `add <name> <phone> [birthday]`
///
/// A birthday that does not parse is dropped with a warning; the contact is
/// still added.
pub fn run(book: &mut AddressBook, args: &str) -> Result<CmdResult> {
    let (name, phone) = name_and_phone(args)?;
    let mut result = CmdResult::default();

    let birthday = match args.split_whitespace().nth(2) {
        Some(raw) => match raw.parse::<Birthday>() {
            Ok(b) => Some(b),
            Err(_) => {
                result.add_message(CmdMessage::warning(format!(
                    "Birthday {} ignored: expected DD.MM.YYYY",
                    raw
                )));
                None
            }
        },
        None => None,
    };

    let record = Record::new(name, Some(phone), birthday);
    let added = match record.birthday {
        Some(b) => format!(
            "Added <{}> with phone <{}>. Birthday: {}",
            record.name, record.phones[0], b
        ),
        None => format!("Added <{}> with phone <{}>", record.name, record.phones[0]),
    };
    book.add_record(record.clone())?;

    result.messages.insert(0, CmdMessage::success(added));
    Ok(result.with_listed_records(vec![record]).modified())
}
