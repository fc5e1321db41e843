use addrbook::api::{CmdMessage, MessageLevel};
use colored::Colorize;
use std::io::{self, Write};

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Plain => writeln!(out, "{}", message.content)?,
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_messages(messages: &[CmdMessage]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_messages(&mut out, messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_message() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_messages(
            &mut out,
            &[
                CmdMessage::plain("Ann : +380501111111 : not indicated"),
                CmdMessage::error("Number is incorrect"),
            ],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Ann : +380501111111 : not indicated\nNumber is incorrect\n"
        );
    }
}
