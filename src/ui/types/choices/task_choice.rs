use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

use crate::evaluation::SeriesFormat;
use crate::tasks::DEFAULT_ITERATIONS;
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::wizard::prompt_choice;
use crate::ui::types::choices::{ChartChoice, UIChoice};

fn default_iterations() -> u64 {
    DEFAULT_ITERATIONS
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CompareParams {
    #[schemars(skip)]
    pub chart: ChartChoice,

    #[serde(default = "default_iterations")]
    #[schemars(
        title = "Iterations",
        description = "Run every method with counts 1..=N",
        range(min = 1),
        default = "default_iterations"
    )]
    pub iterations: u64,

    #[serde(default)]
    #[schemars(
        title = "Seed",
        description = "Monte Carlo PRNG seed (None = OS entropy)"
    )]
    pub seed: Option<u64>,

    #[serde(default)]
    #[schemars(
        title = "Export Directory",
        description = "Also write one data file per method here (None = no export)"
    )]
    pub export_dir: Option<String>,

    #[serde(default)]
    #[schemars(title = "Export Format", description = "Format of the exported series")]
    pub format: SeriesFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(TaskKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum TaskChoice {
    #[strum_discriminants(strum(
        message = "Compare Estimators",
        detailed_message = "Run Archimedes, Leibniz, Wallis and Monte Carlo side by side."
    ))]
    CompareEstimators(CompareParams),
}

impl UIChoice for TaskChoice {
    type Kind = TaskKind;

    fn schema() -> Schema {
        schema_for!(TaskChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a task:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            TaskKind::CompareEstimators => json!({
                "iterations": DEFAULT_ITERATIONS,
                "seed": null,
                "export_dir": null,
                "format": "csv",
            }),
        }
    }

    fn subprompts<D: PromptDriver>(
        driver: &D,
        kind: Self::Kind,
    ) -> anyhow::Result<Option<Map<String, Value>>> {
        match kind {
            TaskKind::CompareEstimators => {
                let chart = prompt_choice::<ChartChoice, _>(driver)?;

                let mut m = Map::new();
                m.insert("chart".into(), serde_json::to_value(chart)?);
                Ok(Some(m))
            }
        }
    }

    fn from_parts(kind: Self::Kind, params: Value) -> anyhow::Result<Self> {
        match kind {
            TaskKind::CompareEstimators => {
                let p: CompareParams = serde_json::from_value(params)?;
                Ok(TaskChoice::CompareEstimators(p))
            }
        }
    }
}
