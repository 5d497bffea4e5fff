//! Source adapters
//!
//! Environment variables reach the `config` crate with lower-cased keys while
//! files keep theirs. [`LowercaseKeys`] folds a file's keys the same way so
//! both layers address the same entry and the later source overrides the
//! earlier one instead of producing two spellings of one field.

use config::{ConfigError, Map, Source, Value, ValueKind};
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use std::fmt;

/// Wraps a source and lower-cases every key it yields, at any depth
#[derive(Debug, Clone)]
pub struct LowercaseKeys<S>(pub S);

impl<S> Source for LowercaseKeys<S>
where
    S: Source + Clone + Send + Sync + 'static,
{
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, ConfigError> {
        Ok(fold_table(self.0.collect()?))
    }
}

fn fold_table(table: Map<String, Value>) -> Map<String, Value> {
    table
        .into_iter()
        .map(|(key, value)| (key.to_lowercase(), fold_value(value)))
        .collect()
}

fn fold_value(mut value: Value) -> Value {
    match &mut value.kind {
        ValueKind::Table(table) => *table = fold_table(std::mem::take(table)),
        ValueKind::Array(items) => {
            *items = std::mem::take(items).into_iter().map(fold_value).collect()
        }
        _ => {}
    }
    value
}

/// Read a feature list given either as a list or as one comma-separated
/// string (the form environment variables use).
///
/// Entries are kept verbatim. Empty segments of the string form are dropped,
/// so an empty variable yields an empty list.
pub fn deserialize_feature_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FeatureListVisitor;

    impl<'de> Visitor<'de> for FeatureListVisitor {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a list of strings or a comma-separated string")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(value
                .split(',')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect())
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut features = Vec::new();
            while let Some(feature) = seq.next_element::<String>()? {
                features.push(feature);
            }
            Ok(features)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(FeatureListVisitor)
}
