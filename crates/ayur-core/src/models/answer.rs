use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single collected response: either one value or, for checkbox-style
/// fields, the set of checked values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerValue {
    Single(String),
    Multi(BTreeSet<String>),
}

impl AnswerValue {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            AnswerValue::Single(v) => Some(v),
            AnswerValue::Multi(_) => None,
        }
    }

    pub fn as_multi(&self) -> Option<&BTreeSet<String>> {
        match self {
            AnswerValue::Single(_) => None,
            AnswerValue::Multi(set) => Some(set),
        }
    }
}

/// Questionnaire responses accumulated for one assessment attempt, keyed by
/// field name.
///
/// Keys are unique; writing a key again replaces its previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerSet(BTreeMap<String, AnswerValue>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&AnswerValue> {
        self.0.get(field)
    }

    /// The value of a single-valued field, if present.
    pub fn single(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(AnswerValue::as_single)
    }

    /// The checked values of a multi-valued field, if present.
    pub fn multi(&self, field: &str) -> Option<&BTreeSet<String>> {
        self.get(field).and_then(AnswerValue::as_multi)
    }

    pub fn insert_single(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), AnswerValue::Single(value.into()));
    }

    pub fn insert_multi<I, S>(&mut self, field: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = values.into_iter().map(Into::into).collect();
        self.0.insert(field.into(), AnswerValue::Multi(set));
    }

    pub fn remove(&mut self, field: &str) -> Option<AnswerValue> {
        self.0.remove(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: Into<String>,
{
    /// Build a set of single-valued answers, mostly useful in tests and
    /// fixtures.
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut answers = AnswerSet::new();
        for (k, v) in iter {
            answers.insert_single(k, v);
        }
        answers
    }
}
