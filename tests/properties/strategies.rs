use proptest::prelude::*;

/// Field names as the API uses them: short ASCII identifiers, mixed case allowed
pub fn field_name_strategy() -> impl Strategy<Value = String> {
	"[a-zA-Z][a-zA-Z0-9_]{0,15}"
}

/// Arbitrary printable values, including characters that need escaping
pub fn field_value_strategy() -> impl Strategy<Value = String> {
	"[ -~]{0,32}"
}

pub fn fields_strategy(max: usize) -> impl Strategy<Value = Vec<(String, String)>> {
	prop::collection::vec((field_name_strategy(), field_value_strategy()), 0..max)
}

/// Status envelope messages, with and without the failure prefix
pub fn message_strategy() -> impl Strategy<Value = String> {
	prop_oneof![
		Just("OK".to_string()),
		Just("No transactions found".to_string()),
		"(?i:notok)[ -~]{0,20}",
		"[ -~]{0,20}",
	]
}
