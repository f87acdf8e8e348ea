//! Command-line configuration for the interactive binary.

use crate::board_errors::ConfigError;
use crate::game_state::board_types::Variant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Variant to play. `None` asks through the menu.
    pub variant: Option<Variant>,
    /// Reprint the board after every applied move.
    pub show_board_after_move: bool,
    /// `env_logger` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            variant: None,
            show_board_after_move: true,
            log_filter: "warn".to_owned(),
        }
    }
}

impl SessionConfig {
    /// Parse flags that follow the program name.
    ///
    /// `--variant <standard|custom|checkers>`, `--quiet`, `--log <filter>`.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = SessionConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--variant" | "-g" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config.variant = Some(value.parse()?);
                }
                "--quiet" | "-q" => config.show_board_after_move = false,
                "--log" => {
                    config.log_filter = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                }
                other => return Err(ConfigError::UnknownFlag(other.to_owned())),
            }
        }

        Ok(config)
    }
}
