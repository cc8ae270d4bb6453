use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

use crate::config::RunConfig;
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{FieldKind, FieldSpec, TaskChoice, UIChoice, specs_for_kind};

/// Walks the user through picking a variant of `C` and filling its params.
pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C> {
    let (kinds, texts): (Vec<C::Kind>, Vec<String>) = C::menu().into_iter().unzip();
    if kinds.is_empty() {
        bail!("nothing to choose from for '{}'", C::prompt_label());
    }

    let idx = driver.ask_choice(C::prompt_label(), C::prompt_help().unwrap_or(""), &texts, 0)?;
    let choice_kind = *kinds
        .get(idx)
        .with_context(|| format!("choice index {idx} out of range"))?;

    let key: &'static str = choice_kind.into();
    let schema = C::schema();
    let specs = specs_for_kind(&schema, key)?;

    let defaults = C::default_params(choice_kind);

    let mut params = Map::new();
    for s in specs {
        let init = s.default.clone().or_else(|| defaults.get(&s.name).cloned());
        if let Some(val) = ask_field(driver, &s, init)? {
            params.insert(s.name.clone(), val);
        }
    }

    if let Some(extra) = C::subprompts(driver, choice_kind)? {
        params.extend(extra);
    }
    C::from_parts(choice_kind, Value::Object(params))
}

/// Full interactive setup of a run.
pub fn prompt_run_config<D: PromptDriver>(driver: &D) -> Result<RunConfig> {
    let task = prompt_choice::<TaskChoice, _>(driver)?;
    let config = RunConfig::from(task);
    config.validate()?;
    Ok(config)
}

fn ask_field<D: PromptDriver>(driver: &D, s: &FieldSpec, init: Option<Value>) -> Result<Option<Value>> {
    let help = s.description.as_deref().unwrap_or("");

    if !s.options.is_empty() {
        let current = init.as_ref().and_then(|v| v.as_str());
        let default = current
            .and_then(|c| s.options.iter().position(|o| o == c))
            .unwrap_or(0);
        let idx = driver.ask_choice(&s.title, help, &s.options, default)?;
        let picked = s
            .options
            .get(idx)
            .with_context(|| format!("invalid option for {}", s.title))?;
        return Ok(Some(Value::String(picked.clone())));
    }

    let is_optional = !s.required
        && s.kind != FieldKind::Boolean
        && matches!(init, None | Some(Value::Null));

    if is_optional {
        let answer = driver.ask_string(&s.title, &format!("{help}\n(leave blank for none)"), "")?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        let val = match s.kind {
            FieldKind::Integer => {
                let n: u64 = answer
                    .parse()
                    .with_context(|| format!("invalid integer for {}", s.title))?;
                Value::from(n)
            }
            FieldKind::Number => {
                let x: f64 = answer
                    .parse()
                    .with_context(|| format!("invalid number for {}", s.title))?;
                Value::from(x)
            }
            FieldKind::String => Value::String(answer.to_string()),
            FieldKind::Boolean => unreachable!(),
        };
        return Ok(Some(val));
    }

    let val = match s.kind {
        FieldKind::Boolean => {
            let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
            Value::Bool(driver.ask_bool(&s.title, help, def)?)
        }
        FieldKind::String => {
            let def = init
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default();
            let answer = driver.ask_string(&s.title, help, &def)?;
            if answer.trim().is_empty() {
                bail!("{} cannot be empty", s.title);
            }
            Value::String(answer)
        }
        FieldKind::Integer => {
            let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
            Value::from(driver.ask_u64(
                &s.title,
                help,
                def,
                s.min.map(|x| x as u64),
                s.max.map(|x| x as u64),
            )?)
        }
        FieldKind::Number => {
            let def = init.and_then(|v| v.as_f64()).unwrap_or(0.0);
            Value::from(driver.ask_f64(&s.title, help, def, s.min, s.max)?)
        }
    };
    Ok(Some(val))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::SeriesFormat;
    use crate::reporting::ChartKind;
    use crate::testing::{Answer, ScriptedDriver};
    use crate::ui::types::choices::{ChartChoice, ChartParameters};
    use std::path::PathBuf;

    #[test]
    fn chart_choice_with_all_defaults() {
        let driver = ScriptedDriver::new([
            Answer::Choice(1),
            Answer::Default,
            Answer::Default,
            Answer::Default,
        ]);
        let c: ChartChoice = prompt_choice(&driver).unwrap();
        assert_eq!(c, ChartChoice::ElapsedVsAccuracy(ChartParameters::default()));
        assert_eq!(
            driver.asked(),
            vec!["Choose a chart:", "Output File", "Width", "Height"]
        );
    }

    #[test]
    fn full_run_config_from_answers() {
        let driver = ScriptedDriver::new([
            Answer::Choice(0),
            Answer::Int(120),
            Answer::Text("7".into()),
            Answer::Text("out/series".into()),
            Answer::Choice(2),
            Answer::Choice(0),
            Answer::Text("chart.svg".into()),
            Answer::Int(800),
            Answer::Default,
        ]);

        let cfg = prompt_run_config(&driver).unwrap();
        assert_eq!(driver.remaining(), 0);
        assert_eq!(cfg.iterations, 120);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.export_dir, Some(PathBuf::from("out/series")));
        assert_eq!(cfg.format, SeriesFormat::Json);
        assert_eq!(cfg.chart, ChartKind::IterationsVsAccuracy);
        assert_eq!(cfg.output, PathBuf::from("chart.svg"));
        assert_eq!((cfg.width, cfg.height), (800, 600));
    }

    #[test]
    fn blank_optional_fields_stay_unset() {
        let driver = ScriptedDriver::new([
            Answer::Choice(0),
            Answer::Default,
            Answer::Text("   ".into()),
            Answer::Default,
            Answer::Default,
            Answer::Choice(1),
            Answer::Default,
            Answer::Default,
            Answer::Default,
        ]);

        let cfg = prompt_run_config(&driver).unwrap();
        assert_eq!(cfg.iterations, 50);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.export_dir, None);
        assert_eq!(cfg.format, SeriesFormat::Csv);
        assert_eq!(cfg.chart, ChartKind::ElapsedVsAccuracy);
    }

    #[test]
    fn bad_seed_is_reported() {
        let driver = ScriptedDriver::new([
            Answer::Choice(0),
            Answer::Default,
            Answer::Text("not-a-number".into()),
        ]);
        let err = prompt_run_config(&driver).unwrap_err();
        assert!(err.to_string().contains("Seed"), "{err}");
    }

    #[test]
    fn zero_iterations_rejected_by_bounds() {
        let driver = ScriptedDriver::new([Answer::Choice(0), Answer::Int(0)]);
        assert!(prompt_run_config(&driver).is_err());
    }
}
