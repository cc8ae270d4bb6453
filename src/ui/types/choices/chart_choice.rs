use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

use crate::reporting::ChartKind;
use crate::ui::types::choices::UIChoice;

pub const DEFAULT_CHART_PATH: &str = "pi-estimations.svg";
pub const DEFAULT_CHART_WIDTH: u32 = 960;
pub const DEFAULT_CHART_HEIGHT: u32 = 600;

fn default_output() -> String {
    DEFAULT_CHART_PATH.to_string()
}

fn default_width() -> u32 {
    DEFAULT_CHART_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_CHART_HEIGHT
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ChartParameters {
    #[serde(default = "default_output")]
    #[schemars(
        title = "Output File",
        description = "Where to write the SVG chart",
        default = "default_output"
    )]
    pub output: String,

    #[serde(default = "default_width")]
    #[schemars(
        title = "Width",
        description = "Chart width in pixels",
        range(min = 320, max = 4096),
        default = "default_width"
    )]
    pub width: u32,

    #[serde(default = "default_height")]
    #[schemars(
        title = "Height",
        description = "Chart height in pixels",
        range(min = 240, max = 4096),
        default = "default_height"
    )]
    pub height: u32,
}

impl Default for ChartParameters {
    fn default() -> Self {
        Self {
            output: default_output(),
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(ChartChoiceKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum ChartChoice {
    #[strum_discriminants(strum(
        message = "Iterations vs Accuracy",
        detailed_message = "Percent accuracy of each method against the number of iterations."
    ))]
    IterationsVsAccuracy(ChartParameters),

    #[strum_discriminants(strum(
        message = "Execution Time vs Accuracy",
        detailed_message = "Percent accuracy of each method against the time each call took."
    ))]
    ElapsedVsAccuracy(ChartParameters),
}

impl ChartChoice {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartChoice::IterationsVsAccuracy(_) => ChartKind::IterationsVsAccuracy,
            ChartChoice::ElapsedVsAccuracy(_) => ChartKind::ElapsedVsAccuracy,
        }
    }

    pub fn params(&self) -> &ChartParameters {
        match self {
            ChartChoice::IterationsVsAccuracy(p) | ChartChoice::ElapsedVsAccuracy(p) => p,
        }
    }
}

impl Default for ChartChoice {
    fn default() -> Self {
        ChartChoice::IterationsVsAccuracy(ChartParameters::default())
    }
}

impl UIChoice for ChartChoice {
    type Kind = ChartChoiceKind;

    fn schema() -> Schema {
        schema_for!(ChartChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a chart:"
    }

    fn default_params(_kind: Self::Kind) -> Value {
        serde_json::to_value(ChartParameters::default()).unwrap_or(Value::Null)
    }
}
