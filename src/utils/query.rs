//! Wire encoding of request fields.
//!
//! GET requests carry their fields in a query string, POST requests in a
//! form-encoded body. Both only support flat scalar fields.

use serde::Serialize;
use serde_json::Value;

use crate::services::dispatch::EScanError;

/// Builds `?name1=value1&name2=value2...` from an ordered field list.
///
/// Names are lower-cased, values are percent-encoded. An empty list yields `?`.
pub fn to_query_string<K, V>(fields: &[(K, V)]) -> String
where
	K: AsRef<str>,
	V: AsRef<str>,
{
	let mut query = String::from("?");
	for (name, value) in fields {
		query.push_str(&name.as_ref().to_lowercase());
		query.push('=');
		query.push_str(&urlencoding::encode(value.as_ref()));
		query.push('&');
	}

	if query.ends_with('&') {
		query.pop();
	}
	query
}

/// Flattens a payload into form fields through its JSON representation.
///
/// The payload must serialize to a JSON object of scalars. Strings are taken as is,
/// numbers and booleans as their JSON text, `null` fields as an empty value. Nested
/// arrays or objects are a usage error.
pub fn to_form_fields<P>(payload: &P) -> Result<Vec<(String, String)>, EScanError>
where
	P: Serialize + ?Sized,
{
	let value = serde_json::to_value(payload).map_err(|e| {
		EScanError::usage_error(format!("Payload cannot be serialized: {}", e))
	})?;

	let Value::Object(map) = value else {
		return Err(EScanError::usage_error(format!(
			"Payload must serialize to a JSON object, got: {}",
			value
		)));
	};

	let mut fields = Vec::with_capacity(map.len());
	for (name, value) in map {
		match value {
			Value::Null => fields.push((name, String::new())),
			Value::String(text) => fields.push((name, text)),
			Value::Bool(_) | Value::Number(_) => fields.push((name, value.to_string())),
			Value::Array(_) | Value::Object(_) => {
				return Err(EScanError::usage_error(format!(
					"Payload field '{}' is not a flat scalar",
					name
				)))
			}
		}
	}
	Ok(fields)
}
