use crate::commands::{CmdMessage, CmdResult};
use crate::config::AinavConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Template,
}

pub fn run(config: &AinavConfig, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match action {
        ConfigAction::ShowAll => return Ok(result.with_config(config.clone())),
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(val) => result.add_message(CmdMessage::info(val)),
            None => {
                result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
            }
        },
        ConfigAction::Template => result.add_message(CmdMessage::info(AinavConfig::template())),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn show_all_returns_config() {
        let config = AinavConfig {
            page_size: 30,
            ..AinavConfig::default()
        };
        let result = run(&config, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().page_size, 30);
    }

    #[test]
    fn show_key_returns_value() {
        let result = run(
            &AinavConfig::default(),
            ConfigAction::ShowKey("default-category".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "common");
    }

    #[test]
    fn unknown_key_is_reported_as_message() {
        let result = run(&AinavConfig::default(), ConfigAction::ShowKey("color".into())).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(result.messages[0].content.contains("color"));
    }

    #[test]
    fn template_lists_keys() {
        let result = run(&AinavConfig::default(), ConfigAction::Template).unwrap();
        assert!(result.messages[0].content.contains("page_size"));
    }
}
