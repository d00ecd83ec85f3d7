use json::JsonValue;
use tracing::{debug, trace};

use crate::structures::{Error, GameVersion, VersionCatalog, VersionFileRef};
use crate::traits::JsonFields;

/// Validates a raw version manifest and turns it into a [`VersionCatalog`].
///
/// The manifest is expected to look like
/// `{ "versions": [ { id, type, releaseTime, client?: {url, sha256, size}, server?: {url, sha256, size} } ] }`.
/// A single malformed record fails the whole manifest, a partial catalog is never returned.
pub fn decode_manifest(bytes: &[u8]) -> Result<VersionCatalog, Error> {
  let text = String::from_utf8(bytes.to_vec())?;
  let parsed_json = json::parse(&text)?;
  if !parsed_json.is_object() {
    return Err(Error::ParseFailure(json::Error::WrongType(format!("Expected the manifest to be a JSON object, got: {}", parsed_json.dump()))));
  }

  let versions = &parsed_json["versions"];
  if versions.is_null() {
    return Err(Error::MalformedManifest("No key named \"versions\"".to_string()));
  }
  if !versions.is_array() {
    return Err(Error::MalformedManifest(format!("\"versions\" is not an array: {}", versions.dump())));
  }

  let versions = versions.members()
    .enumerate()
    .map(|(index, entry)| decode_version(index, entry))
    .collect::<Result<Vec<GameVersion>, Error>>()?;
  debug!("Decoded {} versions from manifest", versions.len());
  Ok(VersionCatalog::new(versions))
}

fn decode_version(index: usize, entry: &JsonValue) -> Result<GameVersion, Error> {
  let id = required(index, "", entry, &["id"], JsonValue::as_string_option, "a string")?;
  trace!("Decoding version {}", id);
  Ok(GameVersion {
    kind: required(index, "", entry, &["type", "kind"], JsonValue::as_string_option, "a string")?,
    release_timestamp: required(index, "", entry, &["releaseTime", "releaseTimestamp"], JsonValue::as_integer_option, "a number")?,
    client_artifact: decode_artifact(index, "client", &entry["client"])?,
    server_artifact: decode_artifact(index, "server", &entry["server"])?,
    id,
  })
}

/// `null` or an absent key means the distribution doesn't exist, anything else has to be a complete artifact.
fn decode_artifact(index: usize, name: &'static str, artifact: &JsonValue) -> Result<Option<VersionFileRef>, Error> {
  if artifact.is_null() {
    return Ok(None);
  }
  if !artifact.is_object() {
    return Err(Error::MalformedEntry { index, field: name.to_string(), reason: format!("Expected an object, got: {}", artifact.dump()) });
  }

  let url = required(index, name, artifact, &["url"], JsonValue::as_string_option, "a string")?;
  if let Err(e) = url::Url::parse(&url) {
    return Err(Error::MalformedEntry { index, field: format!("{}.url", name), reason: format!("\"{}\" is not a well-formed URI: {}", url, e) });
  }
  Ok(Some(VersionFileRef {
    url,
    checksum: required(index, name, artifact, &["sha256", "checksum"], JsonValue::as_string_option, "a string")?,
    size_bytes: required(index, name, artifact, &["size", "sizeBytes"], JsonValue::as_size_option, "a non-negative number")?,
  }))
}

fn required<T>(
  index: usize,
  parent: &str,
  object: &JsonValue,
  names: &[&'static str],
  convert: impl Fn(&JsonValue) -> Option<T>,
  expected: &str,
) -> Result<T, Error> {
  let qualified = |name: &str| if parent.is_empty() { name.to_string() } else { format!("{}.{}", parent, name) };
  let (name, value) = object.lookup(names).ok_or_else(|| Error::MalformedEntry {
    index,
    field: qualified(names[0]),
    reason: "Missing or null".to_string(),
  })?;
  convert(value).ok_or_else(|| Error::MalformedEntry {
    index,
    field: qualified(name),
    reason: format!("Expected {}, got: {}", expected, value.dump()),
  })
}
