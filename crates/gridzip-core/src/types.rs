use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw value specification carried by a single command line override.
///
/// Overrides arrive pre-classified from the external override parser; this
/// crate never interprets the override grammar itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrideValue {
    /// A fixed single value.
    Single(String),
    /// An ordered set of sweep choices, one axis value per choice.
    Choices(Vec<String>),
}

/// A single command line parameter assignment, possibly expanding to
/// multiple sweep choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Override {
    /// Parameter key targeted by the override.
    pub key: String,
    /// Raw value specification.
    pub value: OverrideValue,
}

impl Override {
    /// Creates a fixed single value override.
    pub fn fixed(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: OverrideValue::Single(value.into()),
        }
    }

    /// Creates a sweep override expanding to one value per choice.
    pub fn sweep(key: impl Into<String>, choices: Vec<String>) -> Self {
        Self {
            key: key.into(),
            value: OverrideValue::Choices(choices),
        }
    }

    /// True when the override expands to multiple sweep choices.
    pub fn is_sweep(&self) -> bool {
        matches!(self.value, OverrideValue::Choices(_))
    }
}

/// An independent enumeration dimension contributing one value per job.
///
/// Values are stored as fully formatted `"key=value"` assignment strings
/// and are never empty for a well formed axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    /// Parameter key the axis enumerates.
    pub key: String,
    /// Formatted assignment strings, one per enumeration choice.
    pub values: Vec<String>,
}

impl Axis {
    /// Creates an axis from a key and its formatted assignment strings.
    pub fn new(key: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }

    /// Number of enumeration choices on this axis.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the axis carries no choices.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One fully resolved set of parameter assignments for a single execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Flat ordered `"key=value"` assignment strings.
    pub args: Vec<String>,
}

impl Job {
    /// Creates a job from its ordered assignment strings.
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    /// Returns the key prefix of an assignment string, the text before the
    /// first `=` (the whole string when no `=` is present).
    pub fn arg_key(arg: &str) -> &str {
        match arg.find('=') {
            Some(idx) => &arg[..idx],
            None => arg,
        }
    }

    /// Overwrites the first assignment matching `key` in place, or appends
    /// a new assignment at the end when no occurrence exists.
    ///
    /// Duplicate keys are not structurally forbidden; the first occurrence
    /// is authoritative and later duplicates are left untouched.
    pub fn assign(&mut self, key: &str, value: &str) {
        let formatted = format!("{key}={value}");
        match self.args.iter_mut().find(|arg| Job::arg_key(arg) == key) {
            Some(slot) => *slot = formatted,
            None => self.args.push(formatted),
        }
    }
}

/// The complete ordered set of jobs for one sweep invocation.
///
/// Indexed 0..N-1 at emission; ownership moves to the launcher collaborator
/// which treats the batch as read only input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// Jobs in enumeration order.
    pub jobs: Vec<Job>,
}

impl Batch {
    /// Creates a batch from jobs in enumeration order.
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    /// Number of jobs in the batch.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// True when the batch holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// A parameter overwrite variant applied to every job in a cloned copy of
/// the batch. Iteration order of the map is the overlay application order.
pub type AblativeOverlay = BTreeMap<String, Value>;
