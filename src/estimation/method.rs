use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The four estimation methods under comparison.
///
/// The declaration order is the order series are reported in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    #[strum(to_string = "Archimedes")]
    Archimedes,
    #[strum(to_string = "Leibniz")]
    Leibniz,
    #[strum(to_string = "Wallis")]
    Wallis,
    #[strum(to_string = "Monte Carlo", serialize = "monte-carlo")]
    MonteCarlo,
}

impl Method {
    /// Human-readable label used in legends and tables.
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// File-name friendly identifier (`monte-carlo`, ...).
    pub fn slug(self) -> &'static str {
        match self {
            Method::Archimedes => "archimedes",
            Method::Leibniz => "leibniz",
            Method::Wallis => "wallis",
            Method::MonteCarlo => "monte-carlo",
        }
    }

    /// What the count parameter means for this method.
    pub fn count_unit(self) -> &'static str {
        match self {
            Method::Archimedes => "sides",
            Method::Leibniz | Method::Wallis => "terms",
            Method::MonteCarlo => "points",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn labels_match_legend_text() {
        let labels: Vec<&str> = Method::iter().map(Method::label).collect();
        assert_eq!(labels, vec!["Archimedes", "Leibniz", "Wallis", "Monte Carlo"]);
        assert_eq!(Method::MonteCarlo.to_string(), "Monte Carlo");
    }

    #[test]
    fn ordering_follows_declaration() {
        let mut ms = vec![Method::MonteCarlo, Method::Archimedes, Method::Wallis, Method::Leibniz];
        ms.sort();
        assert_eq!(ms, Method::iter().collect::<Vec<_>>());
    }

    #[test]
    fn parses_label_and_slug() {
        assert_eq!(Method::from_str("Monte Carlo").unwrap(), Method::MonteCarlo);
        assert_eq!(Method::from_str("monte-carlo").unwrap(), Method::MonteCarlo);
        assert_eq!(Method::from_str("Wallis").unwrap(), Method::Wallis);
        assert!(Method::from_str("Euler").is_err());
    }

    #[test]
    fn serde_uses_slugs() {
        let v = serde_json::to_value(Method::MonteCarlo).unwrap();
        assert_eq!(v, serde_json::json!("monte-carlo"));
        for m in Method::iter() {
            assert_eq!(serde_json::to_value(m).unwrap(), serde_json::json!(m.slug()));
        }
    }
}
