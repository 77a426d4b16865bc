use std::str::FromStr;

use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::error::FieldParseError;

/// Raw name/value pairs as the form serializes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    entries: Vec<(String, String)>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later values for an existing name replace the earlier one in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Coerces every field, with no allow-list. Unparsable values become NaN.
    pub fn to_feature_vector(&self) -> FeatureVector {
        FeatureVector {
            entries: self
                .entries
                .iter()
                .map(|(name, value)| (name.clone(), parse_decimal(value)))
                .collect(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for FormInput
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut input = FormInput::new();
        for (name, value) in iter {
            input.insert(name, value);
        }
        input
    }
}

/// A single `name=value` pair, as given on a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAssignment {
    pub name: String,
    pub value: String,
}

impl FromStr for FieldAssignment {
    type Err = FieldParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let Some((name, value)) = raw.split_once('=') else {
            return Err(FieldParseError::MissingSeparator(raw.to_string()));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(FieldParseError::EmptyName(raw.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

/// Numeric payload sent to the scoring endpoint, in form order.
#[derive(Debug, Clone, Default)]
pub struct FeatureVector {
    entries: Vec<(String, f64)>,
}

impl FeatureVector {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| *value)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// serde_json writes non-finite floats as `null`.
impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Parses the longest leading decimal literal of `raw`, ignoring anything
/// after it. Leading whitespace and byte-order marks are skipped. Returns NaN
/// when no literal is present.
pub fn parse_decimal(raw: &str) -> f64 {
    let trimmed = raw.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    let prefix = decimal_prefix(trimmed);
    if prefix.is_empty() {
        return f64::NAN;
    }
    prefix.parse::<f64>().unwrap_or(f64::NAN)
}

fn decimal_prefix(input: &str) -> &str {
    let bytes = input.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        pos += 1;
    }

    if input[pos..].starts_with("Infinity") {
        return &input[..pos + "Infinity".len()];
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = pos - int_start;

    let mut frac_digits = 0;
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut cursor = frac_start;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        frac_digits = cursor - frac_start;
        if int_digits > 0 || frac_digits > 0 {
            pos = cursor;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return "";
    }

    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        let mut cursor = pos + 1;
        if cursor < bytes.len() && matches!(bytes[cursor], b'+' | b'-') {
            cursor += 1;
        }
        let exp_start = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exp_start {
            pos = cursor;
        }
    }

    &input[..pos]
}
