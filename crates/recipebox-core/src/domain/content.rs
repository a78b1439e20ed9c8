//! Ingredient and direction listings returned by the recipe lookup.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator used when a listing is flattened into a single line of text.
const LIST_SEPARATOR: &str = ", ";

/// Ordered ingredient lines, already formatted for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientList(Vec<String>);

impl IngredientList {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(items.into_iter().map(Into::into).collect())
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for IngredientList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(LIST_SEPARATOR))
    }
}

impl From<Vec<String>> for IngredientList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

/// Ordered preparation steps. Position is the step number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectionList(Vec<String>);

impl DirectionList {
    pub fn new<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(steps.into_iter().map(Into::into).collect())
    }

    pub fn steps(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Steps prefixed with their 1-based position: `"1. Mix"`.
    pub fn numbered(&self) -> Vec<String> {
        self.0
            .iter()
            .enumerate()
            .map(|(index, step)| format!("{}. {step}", index + 1))
            .collect()
    }
}

impl fmt::Display for DirectionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(LIST_SEPARATOR))
    }
}

impl From<Vec<String>> for DirectionList {
    fn from(steps: Vec<String>) -> Self {
        Self(steps)
    }
}
