use crate::commands::{CmdMessage, CmdResult};
use crate::config::{BookConfig, KEYS};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = BookConfig::load(dir)?;
            let mut result = CmdResult::default();
            for key in KEYS {
                if let Some(val) = config.get(key) {
                    result.add_message(CmdMessage::plain(format!("{} = {}", key, val)));
                }
            }
            Ok(result)
        }
        ConfigAction::ShowKey(key) => {
            let config = BookConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::plain(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = BookConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                return Ok(CmdResult::message(CmdMessage::error(e.to_string())));
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            Ok(CmdResult::message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            ))))
        }
    }
}
