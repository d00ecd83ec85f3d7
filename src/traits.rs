use async_trait::async_trait;

use crate::structures::Error;

/// Somewhere the raw bytes of the version manifest can be retrieved from.
#[async_trait]
pub trait ManifestSource: Send + Sync {
  async fn fetch(&self) -> Result<Vec<u8>, Error>;
}

/// Checked accessors on a parsed JSON document, `None` whenever the value has the wrong shape.
pub(crate) trait JsonFields {
  /// Returns the first of `names` that is present and not `null`, together with the key that matched.
  fn lookup(&self, names: &[&'static str]) -> Option<(&'static str, &json::JsonValue)>;
  fn as_string_option(&self) -> Option<String>;
  /// Any JSON number, fractions are truncated towards zero.
  fn as_integer_option(&self) -> Option<i64>;
  /// Any non-negative JSON number, fractions are truncated towards zero.
  fn as_size_option(&self) -> Option<u64>;
}

impl JsonFields for json::JsonValue {
  fn lookup(&self, names: &[&'static str]) -> Option<(&'static str, &json::JsonValue)> {
    names.iter()
      .map(|name| (*name, &self[*name]))
      .find(|(_, value)| !value.is_null())
  }

  fn as_string_option(&self) -> Option<String> {
    match *self {
      json::JsonValue::Short(ref value)  => Some(value.to_string()),
      json::JsonValue::String(ref value) => Some(value.to_string()),
      _                                  => None
    }
  }

  fn as_integer_option(&self) -> Option<i64> {
    // as_i64 only accepts numbers without exponent, which keeps integers above 2^53 exact
    self.as_i64().or_else(|| self.as_f64()
      .filter(|value| value.is_finite())
      .map(|value| value.trunc() as i64))
  }

  fn as_size_option(&self) -> Option<u64> {
    self.as_u64().or_else(|| self.as_f64()
      .filter(|value| value.is_finite() && *value >= 0.0)
      .map(|value| value.trunc() as u64))
  }
}
