/// Immutable snapshot of the process environment
///
/// Captured once at startup and threaded into the document builders so that
/// every lookup is a pure function of an explicit key/value map.

use crate::env::error::{Coercion, EnvError};
use std::collections::BTreeMap;

/// Environment keys whose values must never reach the logs
const SECRET_KEYS: &[&str] = &["AWS_ACCESS_KEY", "AWS_SECRET_KEY"];

/// Port-like value that keeps the type it was provided with
///
/// Integers stay integers in the rendered YAML, anything else is emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Str(String),
}

/// Read-only view of environment variables
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment
    ///
    /// Variables that are not valid unicode are skipped rather than aborting the run.
    pub fn from_process() -> Self {
        let vars: BTreeMap<String, String> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        tracing::debug!("📸 Captured {} environment variables", vars.len());
        Self { vars }
    }

    /// Build a snapshot from explicit pairs (tests, embedding callers)
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Number of captured variables
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Raw value, `None` when absent
    pub fn string(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    /// Raw value or the supplied default
    pub fn string_or(&self, key: &str, default: &str) -> String {
        self.string(key).unwrap_or_else(|| default.to_string())
    }

    /// Raw value, `None` when absent or empty
    pub fn non_empty(&self, key: &str) -> Option<String> {
        self.vars.get(key).filter(|v| !v.is_empty()).cloned()
    }

    /// Boolean coercion
    ///
    /// Only a case-insensitive `"true"` is true. Any other present value,
    /// including the empty string, is false. Absence yields `default`.
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        match self.vars.get(key) {
            Some(value) => value.to_lowercase() == "true",
            None => default,
        }
    }

    /// Integer coercion, failing fast on malformed input
    pub fn int_or(&self, key: &str, default: i64) -> Result<i64, EnvError> {
        match self.vars.get(key) {
            Some(value) => value
                .trim()
                .parse::<i64>()
                .map_err(|source| EnvError::InvalidInteger {
                    key: key.to_string(),
                    value: value.clone(),
                    source,
                }),
            None => Ok(default),
        }
    }

    /// Comma-separated list, empty when absent
    pub fn list(&self, key: &str) -> Vec<String> {
        self.list_or(key, &[])
    }

    /// Comma-separated list or the supplied default
    pub fn list_or(&self, key: &str, default: &[&str]) -> Vec<String> {
        match self.vars.get(key) {
            Some(value) => value.split(',').map(str::to_string).collect(),
            None => default.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Port-like scalar: integer when it parses, raw string otherwise
    ///
    /// Surrounding whitespace is ignored when parsing, as in `int_or`.
    pub fn scalar_or(&self, key: &str, default: i64) -> Scalar {
        match self.vars.get(key) {
            Some(value) => match value.trim().parse::<i64>() {
                Ok(n) => Scalar::Int(n),
                Err(_) => {
                    tracing::debug!("{}, keeping raw value", self.describe(key, Coercion::Scalar));
                    Scalar::Str(value.clone())
                }
            },
            None => Scalar::Int(default),
        }
    }

    /// Coercion applied to a key, for diagnostics
    pub fn describe(&self, key: &str, coercion: Coercion) -> String {
        let shown = match self.vars.get(key) {
            Some(_) if is_secret_key(key) => "<redacted>".to_string(),
            Some(v) => format!("{:?}", v),
            None => "<unset>".to_string(),
        };
        format!("{}={} ({})", key, shown, coercion)
    }
}

/// Whether a key carries credentials
pub fn is_secret_key(key: &str) -> bool {
    SECRET_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvSnapshot {
        EnvSnapshot::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn bool_is_case_insensitive_true() {
        for raw in ["TRUE", "true", "True"] {
            assert!(env(&[("FLAG", raw)]).bool_or("FLAG", false), "{raw}");
        }
    }

    #[test]
    fn bool_other_values_are_false() {
        for raw in ["false", "yes", "1", "", " true"] {
            assert!(!env(&[("FLAG", raw)]).bool_or("FLAG", true), "{raw:?}");
        }
    }

    #[test]
    fn bool_absent_uses_default() {
        let snapshot = env(&[]);
        assert!(snapshot.bool_or("FLAG", true));
        assert!(!snapshot.bool_or("FLAG", false));
    }

    #[test]
    fn int_parses_and_defaults() {
        assert_eq!(env(&[("N", "3")]).int_or("N", 5).unwrap(), 3);
        assert_eq!(env(&[("N", " 7 ")]).int_or("N", 5).unwrap(), 7);
        assert_eq!(env(&[]).int_or("N", 5).unwrap(), 5);
    }

    #[test]
    fn int_rejects_non_numeric() {
        let err = env(&[("N", "three")]).int_or("N", 5).unwrap_err();
        match err {
            EnvError::InvalidInteger { key, value, .. } => {
                assert_eq!(key, "N");
                assert_eq!(value, "three");
            }
        }
        assert!(env(&[("N", "")]).int_or("N", 5).is_err());
    }

    #[test]
    fn list_splits_on_commas() {
        assert_eq!(env(&[("L", "a,b,c")]).list("L"), vec!["a", "b", "c"]);
        assert!(env(&[]).list("L").is_empty());
        assert_eq!(env(&[]).list_or("L", &["x"]), vec!["x"]);
    }

    #[test]
    fn scalar_keeps_provided_type() {
        assert_eq!(env(&[("P", "9301")]).scalar_or("P", 9300), Scalar::Int(9301));
        assert_eq!(
            env(&[("P", "9300-9400")]).scalar_or("P", 9300),
            Scalar::Str("9300-9400".into())
        );
        assert_eq!(env(&[]).scalar_or("P", 9300), Scalar::Int(9300));
    }

    #[test]
    fn scalar_trims_like_integers() {
        assert_eq!(env(&[("P", " 9201")]).scalar_or("P", 9200), Scalar::Int(9201));
        assert_eq!(env(&[("P", "9201 \n")]).scalar_or("P", 9200), Scalar::Int(9201));
    }

    #[test]
    fn non_empty_filters_blank_values() {
        assert_eq!(env(&[("K", "")]).non_empty("K"), None);
        assert_eq!(env(&[("K", "v")]).non_empty("K"), Some("v".into()));
    }

    #[test]
    fn describe_names_the_coercion() {
        let snapshot = env(&[("HTTP_ENABLED", "nope")]);
        assert_eq!(
            snapshot.describe("HTTP_ENABLED", Coercion::Bool),
            "HTTP_ENABLED=\"nope\" (boolean)"
        );
        assert_eq!(
            snapshot.describe("PATH_DATA", Coercion::List),
            "PATH_DATA=<unset> (comma-separated list)"
        );
    }

    #[test]
    fn describe_redacts_secrets() {
        let snapshot = env(&[("AWS_SECRET_KEY", "hunter2"), ("ZONE_NAME", "eu")]);
        let secret = snapshot.describe("AWS_SECRET_KEY", Coercion::Raw);
        assert!(!secret.contains("hunter2"));
        assert!(snapshot.describe("ZONE_NAME", Coercion::Raw).contains("\"eu\""));
    }
}
