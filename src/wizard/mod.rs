pub mod controller;
pub mod flows;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use controller::{NextOutcome, Wizard};

/// A single value captured by a wizard field. The source UI kept these in
/// loosely typed key/value maps; here each value carries an explicit tag
/// so step predicates can match on shape instead of guessing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AnswerValue {
    Text(String),
    Number(f64),
    Count(u32),
    Flag(bool),
    Date(NaiveDate),
    TextList(Vec<String>),
}

/// Accumulated answers for one wizard session, keyed by field name.
/// Insertion order is irrelevant; a BTreeMap keeps snapshots deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Answers(BTreeMap<String, AnswerValue>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a single field, overwriting any prior value.
    pub fn set(&mut self, field: impl Into<String>, value: AnswerValue) {
        self.0.insert(field.into(), value);
    }

    pub fn get(&self, field: &str) -> Option<&AnswerValue> {
        self.0.get(field)
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

    pub fn text(&self, field: &str) -> Option<&str> {
        match self.0.get(field) {
            Some(AnswerValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn number(&self, field: &str) -> Option<f64> {
        match self.0.get(field) {
            Some(AnswerValue::Number(n)) => Some(*n),
            Some(AnswerValue::Count(c)) => Some(f64::from(*c)),
            _ => None,
        }
    }

    pub fn count(&self, field: &str) -> Option<u32> {
        match self.0.get(field) {
            Some(AnswerValue::Count(c)) => Some(*c),
            _ => None,
        }
    }

    pub fn flag(&self, field: &str) -> Option<bool> {
        match self.0.get(field) {
            Some(AnswerValue::Flag(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn date(&self, field: &str) -> Option<NaiveDate> {
        match self.0.get(field) {
            Some(AnswerValue::Date(d)) => Some(*d),
            _ => None,
        }
    }

    pub fn text_list(&self, field: &str) -> Option<&[String]> {
        match self.0.get(field) {
            Some(AnswerValue::TextList(items)) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.0.iter()
    }
}

/// Predicate deciding whether a step's required inputs are satisfied.
pub type StepPredicate = Box<dyn Fn(&Answers) -> bool + Send + Sync>;

/// One step in a fixed, ordered wizard flow.
pub struct StepDef {
    id: String,
    predicate: StepPredicate,
}

impl StepDef {
    pub fn new(id: impl Into<String>, predicate: StepPredicate) -> Self {
        Self {
            id: id.into(),
            predicate,
        }
    }

    /// A step with no required inputs (e.g. a review screen).
    pub fn always_valid(id: impl Into<String>) -> Self {
        Self::new(id, Box::new(|_| true))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_satisfied(&self, answers: &Answers) -> bool {
        (self.predicate)(answers)
    }
}

impl std::fmt::Debug for StepDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepDef").field("id", &self.id).finish()
    }
}
