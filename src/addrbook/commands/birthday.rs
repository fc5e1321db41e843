use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::name_arg;

/// `birthday <name>`
pub fn run(book: &AddressBook, args: &str) -> Result<CmdResult> {
    let record = book.require(name_arg(args)?)?;
    Ok(CmdResult::message(CmdMessage::plain(format!(
        "Birthday: {}",
        record.birthday_or_not_indicated()
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::BookStore;

    #[test]
    fn shows_birthday_or_placeholder() {
        let book = StoreFixture::new()
            .with_contact("Ann", "+380501111111", Some("07.03.1990"))
            .with_contact("Bob", "+380502222222", None)
            .store
            .load()
            .unwrap();
        assert_eq!(run(&book, "Ann").unwrap().text(), "Birthday: 07.03.1990");
        assert_eq!(run(&book, "Bob").unwrap().text(), "Birthday: not indicated");
        assert!(run(&book, "Cid").is_err());
    }
}
