use std::fmt::Display;
use std::str::FromStr;

use anyhow::Result;
use inquire::{Confirm, CustomType, Select, Text, validator::Validation};

use crate::ui::cli::drivers::PromptDriver;

/// Terminal prompts backed by `inquire`.
pub struct InquireDriver;

fn ask_bounded<T>(title: &str, help: &str, default: T, min: Option<T>, max: Option<T>) -> Result<T>
where
    T: Copy + Clone + Display + FromStr + PartialOrd + 'static,
{
    let mut q = CustomType::<T>::new(title)
        .with_default(default)
        .with_help_message(help)
        .with_error_message("Please type a valid number");

    if min.is_some() || max.is_some() {
        q = q.with_validator(move |x: &T| {
            let too_low = min.is_some_and(|lo| *x < lo);
            let too_high = max.is_some_and(|hi| *x > hi);
            if !too_low && !too_high {
                return Ok(Validation::Valid);
            }
            let msg = match (min, max) {
                (Some(lo), Some(hi)) => format!("Must be between {lo} and {hi}"),
                (Some(lo), None) => format!("Must be ≥ {lo}"),
                (None, Some(hi)) => format!("Must be ≤ {hi}"),
                (None, None) => unreachable!(),
            };
            Ok(Validation::Invalid(msg.into()))
        });
    }

    Ok(q.prompt()?)
}

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

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        ask_bounded(title, help, default, min, max)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        ask_bounded(title, help, default, min, max)
    }

    fn ask_choice(
        &self,
        title: &str,
        help: &str,
        options: &[String],
        default: usize,
    ) -> Result<usize> {
        let picked = Select::new(title, options.to_vec())
            .with_starting_cursor(default.min(options.len().saturating_sub(1)))
            .with_help_message(help)
            .raw_prompt()?;
        Ok(picked.index)
    }
}
