use super::{CmdMessage, CmdResult};

pub const GREETING: &str = "How can I help you?";

const HELP: &str = "\
help: To see this message
hello: Say hello
add <name> <phone> [DD.MM.YYYY]: Add a contact
change <name> <new_phone>: Change the contact's first phone
phone <name>: Show the phones of <name>
birthday <name>: Show when <name> was born
days left <name>: Days until the next birthday of <name>
set birthday <name> <DD.MM.YYYY>: Set or replace a birthday
remove phone <name> <phone>: Remove a phone from a contact
find <text>: Search names, phones and birthdays
show all [n]: List contacts, optionally <n> per page
exit: Leave (also: close, good bye)";

pub fn hello() -> CmdResult {
    CmdResult::message(CmdMessage::plain(GREETING))
}

pub fn help() -> CmdResult {
    CmdResult::message(CmdMessage::plain(HELP))
}

pub fn exit() -> CmdResult {
    let mut result = CmdResult::message(CmdMessage::plain("Good bye"));
    result.exit = true;
    result
}

pub fn unknown(line: &str) -> CmdResult {
    let mut result = CmdResult::message(CmdMessage::error("Invalid command"));
    if !line.is_empty() {
        result.add_message(CmdMessage::info("Type <help> to see what I understand"));
    }
    result
}
