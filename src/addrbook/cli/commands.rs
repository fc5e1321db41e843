use super::print::{print_messages, write_messages};
use super::setup::{Cli, Commands};
use addrbook::api::{self, AddressBookApi, CmdMessage, ConfigAction};
use addrbook::commands::greet::GREETING;
use addrbook::error::Result;
use addrbook::init::{data_dir, initialize, locate};
use addrbook::logging::init_tracing;
use addrbook::store::fs::FileStore;
use addrbook::store::BookStore;
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;

const PROMPT: &str = "Enter command: ";

struct AppContext {
    api: AddressBookApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dir = data_dir()?;
    let file = cli.file.as_deref();

    // `config` and `path` must work even when the book cannot be loaded.
    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(&dir, key, value),
        Some(Commands::Path) => handle_path(&dir, file),
        command => {
            let mut ctx = init_context(&dir, file)?;
            match command {
                Some(Commands::Run { line }) => handle_run(&mut ctx, &line.join(" ")),
                _ => handle_repl(&mut ctx),
            }
        }
    }
}

fn init_context(dir: &Path, file: Option<&Path>) -> Result<AppContext> {
    let api = initialize(dir, file)?;
    Ok(AppContext { api })
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn handle_repl(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl(&mut ctx.api, stdin.lock(), &mut stdout.lock(), today())
}

fn handle_run(ctx: &mut AppContext, line: &str) -> Result<()> {
    let accepted = {
        let stdout = io::stdout();
        let stderr = io::stderr();
        run_line(
            &mut ctx.api,
            line,
            &mut stdout.lock(),
            &mut stderr.lock(),
            today(),
        )?
    };
    if !accepted {
        std::process::exit(1);
    }
    Ok(())
}

fn handle_config(dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let result = api::config(dir, action)?;
    print_messages(&result.messages)?;
    Ok(())
}

fn handle_path(dir: &Path, file: Option<&Path>) -> Result<()> {
    println!("{}", locate(dir, file)?.display());
    Ok(())
}

/// Runs a single line. An input mistake is written to `err` as its fixed
/// message and yields `false`; other failures propagate.
fn run_line<S, W, E>(
    api: &mut AddressBookApi<S>,
    line: &str,
    out: &mut W,
    err: &mut E,
    today: NaiveDate,
) -> Result<bool>
where
    S: BookStore,
    W: Write,
    E: Write,
{
    match api.execute(line, today) {
        Ok(result) => {
            write_messages(out, &result.messages)?;
            Ok(true)
        }
        Err(e) if e.is_input_error() => {
            debug!(error = %e, "input rejected");
            write_messages(err, &[CmdMessage::error(e.user_message())])?;
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// The prompt loop. Reads lines from `input` until `exit` or end of input;
/// input mistakes are shown and the loop continues.
fn repl<S, R, W>(
    api: &mut AddressBookApi<S>,
    input: R,
    out: &mut W,
    today: NaiveDate,
) -> Result<()>
where
    S: BookStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{} Type <help> if you need help.", GREETING)?;
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                writeln!(out)?;
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match api.execute(&line, today) {
            Ok(result) => {
                write_messages(out, &result.messages)?;
                if result.exit {
                    break;
                }
            }
            Err(e) if e.is_input_error() => {
                debug!(error = %e, "input rejected");
                write_messages(out, &[CmdMessage::error(e.user_message())])?;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
