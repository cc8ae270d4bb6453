use std::cell::RefCell;
use std::collections::VecDeque;

use anyhow::{Result, anyhow, bail};

use crate::ui::cli::drivers::PromptDriver;

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Bool(bool),
    Text(String),
    Int(u64),
    Num(f64),
    Choice(usize),
    /// Accept whatever default the prompt offers.
    Default,
}

/// Replays canned answers in order and records every prompt title.
#[derive(Default)]
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedDriver {
    pub fn new<I: IntoIterator<Item = Answer>>(answers: I) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, title: &str) -> Result<Answer> {
        self.asked.borrow_mut().push(title.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted answer left for '{title}'"))
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_bool(&self, title: &str, _help: &str, default: bool) -> Result<bool> {
        match self.next(title)? {
            Answer::Bool(b) => Ok(b),
            Answer::Default => Ok(default),
            other => bail!("expected bool for '{title}', got {other:?}"),
        }
    }

    fn ask_string(&self, title: &str, _help: &str, default: &str) -> Result<String> {
        match self.next(title)? {
            Answer::Text(s) => Ok(s),
            Answer::Default => Ok(default.to_string()),
            other => bail!("expected text for '{title}', got {other:?}"),
        }
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        let v = match self.next(title)? {
            Answer::Int(n) => n,
            Answer::Default => default,
            other => bail!("expected integer for '{title}', got {other:?}"),
        };
        if min.is_some_and(|lo| v < lo) || max.is_some_and(|hi| v > hi) {
            bail!("{v} out of range for '{title}'");
        }
        Ok(v)
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        default: f64,
        _min: Option<f64>,
        _max: Option<f64>,
    ) -> Result<f64> {
        match self.next(title)? {
            Answer::Num(x) => Ok(x),
            Answer::Default => Ok(default),
            other => bail!("expected number for '{title}', got {other:?}"),
        }
    }

    fn ask_choice(
        &self,
        title: &str,
        _help: &str,
        options: &[String],
        default: usize,
    ) -> Result<usize> {
        let idx = match self.next(title)? {
            Answer::Choice(i) => i,
            Answer::Default => default,
            other => bail!("expected choice for '{title}', got {other:?}"),
        };
        if idx >= options.len() {
            bail!("choice {idx} out of range for '{title}'");
        }
        Ok(idx)
    }
}
