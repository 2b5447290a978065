use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Text spelling of the [`OptionValue::Random`] sentinel.
pub const RANDOM: &str = "random";

/// The value of an option default.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionValue {
	/// Boolean value (true/false).
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// Text value: free text, a choice name, or a special range name.
	Text(String),
	/// Resolved to a concrete value by the host at generation time.
	Random,
}

impl OptionValue {
	/// Returns the boolean value if this is a `Bool` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			OptionValue::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the integer value if this is an `Int` variant.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			OptionValue::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the string value if this is a `Text` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			OptionValue::Text(v) => Some(v),
			_ => None,
		}
	}

	/// Returns true for the random sentinel, including its text spelling.
	pub fn is_random(&self) -> bool {
		match self {
			OptionValue::Random => true,
			OptionValue::Text(v) => v == RANDOM,
			_ => false,
		}
	}

	/// Returns the type of this value.
	pub fn value_type(&self) -> ValueType {
		match self {
			OptionValue::Bool(_) => ValueType::Bool,
			OptionValue::Int(_) => ValueType::Int,
			OptionValue::Text(_) => ValueType::Text,
			OptionValue::Random => ValueType::Random,
		}
	}

	/// Returns the type name of this value.
	pub fn type_name(&self) -> &'static str {
		self.value_type().name()
	}
}

impl std::fmt::Display for OptionValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			OptionValue::Bool(v) => write!(f, "{v}"),
			OptionValue::Int(v) => write!(f, "{v}"),
			OptionValue::Text(v) => f.write_str(v),
			OptionValue::Random => f.write_str(RANDOM),
		}
	}
}

impl From<bool> for OptionValue {
	fn from(v: bool) -> Self {
		OptionValue::Bool(v)
	}
}

impl From<i64> for OptionValue {
	fn from(v: i64) -> Self {
		OptionValue::Int(v)
	}
}

impl From<i32> for OptionValue {
	fn from(v: i32) -> Self {
		OptionValue::Int(i64::from(v))
	}
}

impl From<String> for OptionValue {
	fn from(v: String) -> Self {
		OptionValue::Text(v)
	}
}

impl From<&str> for OptionValue {
	fn from(v: &str) -> Self {
		OptionValue::Text(v.to_string())
	}
}

/// Serializes plain values as themselves and the sentinel as
/// `{ "random": true }`, so output never confuses it with a text value that
/// happens to read "random".
impl Serialize for OptionValue {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			OptionValue::Bool(v) => serializer.serialize_bool(*v),
			OptionValue::Int(v) => serializer.serialize_i64(*v),
			OptionValue::Text(v) => serializer.serialize_str(v),
			OptionValue::Random => {
				let mut map = serializer.serialize_map(Some(1))?;
				map.serialize_entry(RANDOM, &true)?;
				map.end()
			}
		}
	}
}

/// Accepts both sentinel spellings: the marker table and the bare text
/// "random". The bare text is ambiguous, so readers that know the option
/// kind map it back to text where it names a value.
impl<'de> Deserialize<'de> for OptionValue {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(deny_unknown_fields)]
		struct Marker {
			random: bool,
		}

		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Raw {
			Bool(bool),
			Int(i64),
			Text(String),
			Marker(Marker),
		}

		match Raw::deserialize(deserializer)? {
			Raw::Bool(v) => Ok(OptionValue::Bool(v)),
			Raw::Int(v) => Ok(OptionValue::Int(v)),
			Raw::Text(v) if v == RANDOM => Ok(OptionValue::Random),
			Raw::Text(v) => Ok(OptionValue::Text(v)),
			Raw::Marker(Marker { random: true }) => Ok(OptionValue::Random),
			Raw::Marker(Marker { random: false }) => Err(D::Error::custom("random marker must be `random = true`")),
		}
	}
}

/// The type of an option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
	/// Boolean type.
	Bool,
	/// Integer type.
	Int,
	/// Text type.
	Text,
	/// The random sentinel.
	Random,
}

impl ValueType {
	pub const fn name(self) -> &'static str {
		match self {
			ValueType::Bool => "bool",
			ValueType::Int => "int",
			ValueType::Text => "text",
			ValueType::Random => RANDOM,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn random_sentinel_has_two_spellings() {
		assert!(OptionValue::Random.is_random());
		assert!(OptionValue::from("random").is_random());
		assert!(!OptionValue::from("horde").is_random());
		assert!(!OptionValue::Int(0).is_random());
	}

	#[test]
	fn accessors_match_variant() {
		assert_eq!(OptionValue::Bool(true).as_bool(), Some(true));
		assert_eq!(OptionValue::Int(7).as_int(), Some(7));
		assert_eq!(OptionValue::from("x").as_str(), Some("x"));
		assert_eq!(OptionValue::Int(7).as_bool(), None);
		assert_eq!(OptionValue::Random.type_name(), "random");
	}

	#[test]
	fn display_renders_plain_values() {
		assert_eq!(OptionValue::Bool(false).to_string(), "false");
		assert_eq!(OptionValue::Int(-3).to_string(), "-3");
		assert_eq!(OptionValue::Random.to_string(), "random");
	}
}
