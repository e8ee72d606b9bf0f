use anyhow::{Context, Result};
use std::fmt::{Display, Formatter};
use std::fs;
use strum::{EnumMessage, IntoEnumIterator};

use crate::api::{BuildTreeRequest, CriterionChoice, build_tree};
use crate::core::Record;
use crate::tree::TreeNode;
use crate::ui::cli::drivers::PromptDriver;

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

struct ChoiceItem {
    choice: CriterionChoice,
    text: String,
}

impl Display for ChoiceItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn criterion_items() -> Vec<ChoiceItem> {
    CriterionChoice::iter()
        .map(|choice| {
            let label = choice.get_message().unwrap_or_else(|| choice.into());
            let desc = choice.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            ChoiceItem { choice, text }
        })
        .collect()
}

/// Interactive demo flow: load a build request from a JSON file, build the
/// tree, print it, then optionally classify hand-entered records against it.
pub fn run_wizard<D: PromptDriver>(driver: &D) -> Result<()> {
    let selected = inquire::Select::new("Split criterion", criterion_items())
        .with_help_message("How the builder scores candidate attributes.")
        .prompt()?;

    let path = driver.ask_string(
        "Dataset file",
        "Path to a JSON build request (dataset, targetAttribute, attributes).",
        "dataset.json",
    )?;
    let text = fs::read_to_string(&path).with_context(|| format!("cannot read {path}"))?;
    let mut request: BuildTreeRequest =
        serde_json::from_str(&text).with_context(|| format!("{path} is not a build request"))?;
    request.criterion = selected.choice;

    let features = request.attributes.clone();
    let tree = build_tree(request)?;
    println!("\n{tree}");

    while driver.ask_bool("Classify a record?", "", true)? {
        let record = prompt_record(driver, &features)?;
        report(&tree, &record);
    }

    Ok(())
}

fn prompt_record<D: PromptDriver>(driver: &D, features: &[String]) -> Result<Record> {
    let mut record = Record::new();
    for feature in features {
        let value = driver.ask_string(feature, "Categorical value; blank to omit.", "")?;
        let value = value.trim();
        if !value.is_empty() {
            record.set(feature, value);
        }
    }
    Ok(record)
}

fn report(tree: &TreeNode, record: &Record) {
    let result = tree.classify_with_trace(record);
    for step in &result.path {
        match step.branch {
            Some(value) => println!("  {} = {value}", step.attribute),
            None => println!(
                "  {} has no branch for this value; using the majority label",
                step.attribute
            ),
        }
    }
    println!("=> {}\n", result.prediction);
}
