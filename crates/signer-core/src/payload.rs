//! Scalar payloads handed to the signer.
//!
//! A [`Payload`] maps string keys to [`Scalar`] values. Nested structures are
//! unrepresentable in the typed API; untyped input (JSON documents, CLI
//! arguments) goes through [`Payload::from_json`] / [`Payload::from_pairs`],
//! which reject anything that is not a string, number, or boolean.
//!
//! The `Display` form of a scalar is the value that ends up in both the
//! canonical context and the query string, so it must be stable across
//! implementations: booleans render as `True`/`False`, floats always carry a
//! fractional part or an exponent (`2.0`, `1.5`, `1e+16`, `1e-05`).

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use serde_json::Value;

use crate::error::SignerError;

/// A single payload value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => f.write_str(&format_float(*v)),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
        }
    }
}

/// Shortest round-trip digits, fixed notation for exponents in `[-4, 16)` and
/// scientific notation (`1.5e+20`) outside it.
fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. "-1.25e-7".
    let sci = format!("{v:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let body = if (-4..16).contains(&exp) {
        if exp >= 0 {
            let int_len = exp as usize + 1;
            if digits.len() <= int_len {
                format!("{digits}{}.0", "0".repeat(int_len - digits.len()))
            } else {
                format!("{}.{}", &digits[..int_len], &digits[int_len..])
            }
        } else {
            format!("0.{}{digits}", "0".repeat((-exp - 1) as usize))
        }
    } else {
        let (head, tail) = digits.split_at(1);
        let frac = if tail.is_empty() { String::new() } else { format!(".{tail}") };
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{head}{frac}e{exp_sign}{:02}", exp.abs())
    };
    format!("{sign}{body}")
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// Key/value data to sign, ordered by key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    entries: BTreeMap<String, Scalar>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Option<Scalar> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Scalar> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in ascending byte order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Scalar> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy every entry of `other` into `self`, overwriting shared keys.
    pub fn extend_from(&mut self, other: &Payload) {
        for (k, v) in other.iter() {
            self.entries.insert(k.clone(), v.clone());
        }
    }

    /// Build a payload from a JSON object of scalar members.
    ///
    /// # Errors
    ///
    /// Returns [`SignerError::InvalidPayloadValue`] if the root is not an
    /// object or any member is `null`, an array, or an object.
    pub fn from_json(value: &Value) -> Result<Self, SignerError> {
        let Value::Object(map) = value else {
            return Err(SignerError::InvalidPayloadValue {
                key: "<root>".to_string(),
                kind: json_kind(value).to_string(),
            });
        };

        let mut payload = Self::new();
        for (key, member) in map {
            let scalar = match member {
                Value::String(s) => Scalar::Str(s.clone()),
                Value::Bool(b) => Scalar::Bool(*b),
                Value::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        Scalar::Int(i)
                    } else if n.is_u64() {
                        // Beyond i64; keep the exact decimal digits.
                        Scalar::Str(n.to_string())
                    } else {
                        Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
                    }
                }
                other => {
                    return Err(SignerError::InvalidPayloadValue {
                        key: key.clone(),
                        kind: json_kind(other).to_string(),
                    });
                }
            };
            payload.insert(key.clone(), scalar);
        }
        Ok(payload)
    }

    /// Build a string-valued payload from `key=value` arguments.
    ///
    /// Only the first `=` splits; the value may itself contain `=`.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, SignerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut payload = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let Some((key, value)) = pair.split_once('=') else {
                return Err(SignerError::InvalidPayloadValue {
                    key: pair.to_string(),
                    kind: "an argument without `=`".to_string(),
                });
            };
            payload.insert(key, value);
        }
        Ok(payload)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for Payload {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut payload = Self::new();
        for (k, v) in iter {
            payload.insert(k, v);
        }
        payload
    }
}

impl<K: Into<String>, V: Into<Scalar>, const N: usize> From<[(K, V); N]> for Payload {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Payload {
    type Item = (&'a String, &'a Scalar);
    type IntoIter = btree_map::Iter<'a, String, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
