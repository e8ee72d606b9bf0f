use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{Confirm, Text};

pub struct InquireDriver;

impl PromptDriver for InquireDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }
}
