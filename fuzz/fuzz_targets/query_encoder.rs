#![no_main]

use escan_client::utils::{to_form_fields, to_query_string};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|fields: Vec<(String, String)>| {
	let query = to_query_string(&fields);
	assert!(query.starts_with('?'));
	assert!(!query.ends_with('&'));

	let object: serde_json::Map<String, serde_json::Value> = fields
		.into_iter()
		.map(|(name, value)| (name, serde_json::Value::String(value)))
		.collect();
	let form = to_form_fields(&object).unwrap();
	assert_eq!(form.len(), object.len());
});
