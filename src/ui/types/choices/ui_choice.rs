use anyhow::{Context, Result};
use schemars::{JsonSchema, Schema};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

/// A `{"type": .., "params": ..}` tagged enum the wizard can offer as a menu
/// and fill in field by field from its JSON schema.
pub trait UIChoice: Sized + Serialize + DeserializeOwned + JsonSchema {
    type Kind: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator;

    fn schema() -> Schema;

    fn prompt_label() -> &'static str {
        "Choose a type:"
    }
    fn prompt_help() -> Option<&'static str> {
        Some("↑/↓ to navigate, ↵ to select")
    }

    /// Menu entries: every kind with its message and a dimmed description.
    fn menu() -> Vec<(Self::Kind, String)> {
        Self::Kind::iter()
            .map(|k| {
                let label = k.get_message().unwrap_or_else(|| k.into());
                let text = match k.get_detailed_message() {
                    Some(desc) if !desc.is_empty() => {
                        format!("{label}  {DIM_ITALIC}{desc}{RESET}")
                    }
                    _ => label.to_string(),
                };
                (k, text)
            })
            .collect()
    }

    /// Default `params` JSON for a given kind.
    fn default_params(kind: Self::Kind) -> Value;

    /// Extra params gathered through nested wizards. Default: none.
    fn subprompts<D: PromptDriver>(
        _driver: &D,
        _kind: Self::Kind,
    ) -> Result<Option<Map<String, Value>>> {
        Ok(None)
    }

    fn from_parts(kind: Self::Kind, params: Value) -> Result<Self> {
        let key: &'static str = kind.into();
        let v = json!({ "type": key, "params": params });
        serde_json::from_value(v).with_context(|| format!("invalid parameters for {key}"))
    }
}
