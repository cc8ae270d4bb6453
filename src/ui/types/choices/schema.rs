use anyhow::{Context, Result, anyhow, bail};
use schemars::Schema;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
}

/// One prompt-able parameter extracted from a `params` schema.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Allowed values for string enums, empty otherwise.
    pub options: Vec<String>,
}

pub fn specs_for_kind(root: &Schema, kind_key: &str) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;

    let alts = root_obj
        .get("oneOf")
        .or_else(|| root_obj.get("anyOf"))
        .and_then(|v| v.as_array())
        .context("missing oneOf/anyOf")?;

    for branch in alts {
        let bobj = branch.as_object().context("branch is not object")?;
        let Some(props) = bobj.get("properties").and_then(|v| v.as_object()) else {
            continue;
        };

        if !discriminant_matches(props, kind_key) {
            continue;
        }

        let Some(params_obj) = props.get("params").and_then(|v| v.as_object()) else {
            return Ok(vec![]);
        };
        let Some(params_obj) = resolve_ref_obj(root_obj, params_obj) else {
            return Ok(vec![]);
        };
        let Some(params_props) = params_obj.get("properties").and_then(|v| v.as_object()) else {
            return Ok(vec![]);
        };

        let required: Vec<&str> = params_obj
            .get("required")
            .and_then(|v| v.as_array())
            .map(|a| a.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default();

        let mut out = Vec::new();
        for (name, field_schema) in params_props {
            let field_obj = field_schema
                .as_object()
                .context("field schema not object")?;

            // Annotations may sit next to a `$ref`, the type lives behind it.
            let target = resolve_ref_obj(root_obj, field_obj)
                .ok_or_else(|| anyhow!("failed to resolve field $ref for '{name}'"))?;
            let lookup = |key: &str| field_obj.get(key).or_else(|| target.get(key));

            let Some(kind) = detect_field_kind(target.get("type")) else {
                continue;
            };

            let title = lookup("title")
                .and_then(|v| v.as_str())
                .unwrap_or(name)
                .to_string();

            let description = lookup("description")
                .and_then(|v| v.as_str())
                .map(str::to_string);

            let options = target
                .get("enum")
                .and_then(|v| v.as_array())
                .map(|a| {
                    a.iter()
                        .filter_map(|v| v.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default();

            let min = target
                .get("minimum")
                .or_else(|| target.get("exclusiveMinimum"))
                .and_then(|v| v.as_f64());

            let max = target
                .get("maximum")
                .or_else(|| target.get("exclusiveMaximum"))
                .and_then(|v| v.as_f64());

            out.push(FieldSpec {
                name: name.clone(),
                title,
                description,
                required: required.contains(&name.as_str()),
                kind,
                default: lookup("default").cloned(),
                min,
                max,
                options,
            });
        }

        return Ok(out);
    }

    bail!("no branch found for type={kind_key}");
}

fn discriminant_matches(props: &Map<String, Value>, kind_key: &str) -> bool {
    let Some(tobj) = props.get("type").and_then(|v| v.as_object()) else {
        return false;
    };

    if tobj.get("const").and_then(|v| v.as_str()) == Some(kind_key) {
        return true;
    }
    if let Some(arr) = tobj.get("enum").and_then(|v| v.as_array()) {
        if arr.len() == 1 && arr[0].as_str() == Some(kind_key) {
            return true;
        }
    }
    false
}

/// Resolve a local $ref like "#/$defs/ChartParameters" against the root object.
/// Returns the referenced object map, or None if it can't be resolved.
fn resolve_ref_obj<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    match obj.get("$ref") {
        Some(Value::String(r)) => {
            let path = r.strip_prefix("#/")?;
            let mut cur: &Map<String, Value> = root_obj;
            for raw_seg in path.split('/') {
                // JSON Pointer unescape (~1 => /, ~0 => ~)
                let seg = raw_seg.replace("~1", "/").replace("~0", "~");
                cur = cur.get(&seg)?.as_object()?;
            }
            Some(cur)
        }
        _ => Some(obj),
    }
}

fn kind_from_name(s: &str) -> Option<FieldKind> {
    match s {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        "number" => Some(FieldKind::Number),
        "boolean" => Some(FieldKind::Boolean),
        _ => None,
    }
}

fn detect_field_kind(ty: Option<&Value>) -> Option<FieldKind> {
    match ty {
        Some(Value::String(s)) => kind_from_name(s),
        // unions like ["integer","null"] for Option<T>
        Some(Value::Array(arr)) => arr.iter().filter_map(|v| v.as_str()).find_map(kind_from_name),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn root(v: Value) -> Schema {
        Schema::try_from(v).unwrap()
    }

    #[test]
    fn picks_matching_branch_and_reads_annotations() {
        let schema = root(json!({
            "oneOf": [
                {"properties": {"type": {"const": "a"}, "params": {"$ref": "#/$defs/A"}}},
                {"properties": {"type": {"const": "b"}}}
            ],
            "$defs": {
                "A": {
                    "type": "object",
                    "properties": {
                        "n": {"type": "integer", "title": "N", "minimum": 1, "maximum": 9, "default": 3},
                        "fmt": {"$ref": "#/$defs/Fmt", "title": "Format", "description": "out"},
                        "seed": {"type": ["integer", "null"]}
                    },
                    "required": ["n"]
                },
                "Fmt": {"type": "string", "enum": ["csv", "json"]}
            }
        }));

        let specs = specs_for_kind(&schema, "a").unwrap();
        assert_eq!(specs.len(), 3);

        let n = specs.iter().find(|s| s.name == "n").unwrap();
        assert_eq!(n.kind, FieldKind::Integer);
        assert_eq!(n.title, "N");
        assert!(n.required);
        assert_eq!((n.min, n.max), (Some(1.0), Some(9.0)));
        assert_eq!(n.default, Some(json!(3)));

        let fmt = specs.iter().find(|s| s.name == "fmt").unwrap();
        assert_eq!(fmt.kind, FieldKind::String);
        assert_eq!(fmt.title, "Format");
        assert_eq!(fmt.description.as_deref(), Some("out"));
        assert_eq!(fmt.options, vec!["csv".to_string(), "json".to_string()]);

        let seed = specs.iter().find(|s| s.name == "seed").unwrap();
        assert_eq!(seed.kind, FieldKind::Integer);
        assert!(!seed.required);
        assert_eq!(seed.title, "seed");
    }

    #[test]
    fn branch_without_params_has_no_fields() {
        let schema = root(json!({"oneOf": [{"properties": {"type": {"enum": ["b"]}}}]}));
        assert!(specs_for_kind(&schema, "b").unwrap().is_empty());
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let schema = root(json!({"oneOf": [{"properties": {"type": {"const": "a"}}}]}));
        assert!(specs_for_kind(&schema, "zzz").is_err());
    }
}
