//! Decoding of `response_type`-tagged response items.
//!
//! Both response families are decoded the same way: the raw object is read
//! whole, the `response_type` string is taken out first, and only then is
//! the remainder decoded as the payload of the selected variant. A missing
//! tag or an unknown one is an error; there is no fallback variant.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// The discriminator key shared by every polymorphic response item.
pub const RESPONSE_TYPE: &str = "response_type";

/// Remove the discriminator from `object` and return it.
pub(crate) fn take_tag<E: serde::de::Error>(object: &mut Map<String, Value>) -> Result<String, E> {
    match object.remove(RESPONSE_TYPE) {
        Some(Value::String(tag)) => Ok(tag),
        Some(other) => Err(E::custom(format!(
            "discriminator `{}` must be a string, got {}",
            RESPONSE_TYPE, other
        ))),
        None => Err(E::custom(format!(
            "missing discriminator `{}`",
            RESPONSE_TYPE
        ))),
    }
}

/// Decode the variant payload selected by the tag.
pub(crate) fn decode_payload<T, E>(object: Map<String, Value>) -> Result<T, E>
where
    T: DeserializeOwned,
    E: serde::de::Error,
{
    serde_json::from_value(Value::Object(object)).map_err(E::custom)
}

/// Error for a tag that names no known variant.
pub(crate) fn unrecognized<E: serde::de::Error>(tag: &str, expected: &[&str]) -> E {
    E::custom(format!(
        "unrecognized variant `{}` for discriminator `{}`, expected one of: {}",
        tag,
        RESPONSE_TYPE,
        expected.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_take_tag() {
        let mut map = object(json!({"response_type": "text", "text": "hi"}));
        let tag: Result<String, serde_json::Error> = take_tag(&mut map);
        assert_eq!(tag.unwrap(), "text");
        assert!(!map.contains_key(RESPONSE_TYPE));
        assert_eq!(map.get("text"), Some(&json!("hi")));
    }

    #[test]
    fn test_take_tag_missing() {
        let err = take_tag::<serde_json::Error>(&mut object(json!({"text": "hi"}))).unwrap_err();
        assert!(err.to_string().contains("missing discriminator"));
    }

    #[test]
    fn test_take_tag_not_a_string() {
        let err =
            take_tag::<serde_json::Error>(&mut object(json!({"response_type": 3}))).unwrap_err();
        assert!(err.to_string().contains("must be a string"));
    }

    #[test]
    fn test_unrecognized_lists_expected() {
        let err: serde_json::Error = unrecognized("bogus", &["text", "pause"]);
        let message = err.to_string();
        assert!(message.contains("unrecognized variant `bogus`"));
        assert!(message.contains("text, pause"));
    }
}
