use indexmap::IndexMap;
use serde_json::Value;

use crate::{Arguments, Error};

/// Key holding the field arguments of an expansion node in its JSON form.
const ARGUMENTS_KEY: &str = "args";

/// Which relations to descend into, and with which arguments.
///
/// In JSON, every key except `args` names a field to expand:
///
/// ```json
/// { "friends": { "args": { "first": 10 }, "posts": {} } }
/// ```
///
/// `"args": false` means "no arguments", as does any other non-object value.
/// A field mapped to `false` or `null` is not expanded.
#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize)]
#[serde(from = "Value")]
pub struct Expansion {
    arguments: Option<Arguments>,
    fields: IndexMap<String, Expansion>,
}

impl Expansion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(Error::InvalidExpansion)
    }

    /// Expand `field` with the given nested expansion.
    #[must_use]
    pub fn expand(mut self, field: impl Into<String>, expansion: Expansion) -> Self {
        self.fields.insert(field.into(), expansion);
        self
    }

    #[must_use]
    pub fn with_arguments<I, K, V>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.arguments = Some(
            arguments
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        );
        self
    }

    /// The arguments for the field this node expands.
    pub fn arguments(&self) -> Option<&Arguments> {
        self.arguments.as_ref()
    }

    pub fn field(&self, name: &str) -> Option<&Expansion> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Expansion)> {
        self.fields.iter().map(|(name, expansion)| (name.as_str(), expansion))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.arguments.is_none()
    }
}

impl From<Value> for Expansion {
    fn from(value: Value) -> Self {
        let Value::Object(object) = value else {
            return Expansion::default();
        };

        let mut expansion = Expansion::default();

        for (key, value) in object {
            if key == ARGUMENTS_KEY {
                if let Value::Object(arguments) = value {
                    expansion.arguments = Some(arguments.into_iter().collect());
                }
                continue;
            }

            if matches!(value, Value::Null | Value::Bool(false)) {
                continue;
            }

            expansion.fields.insert(key, Expansion::from(value));
        }

        expansion
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn nested_fields_and_arguments() {
        let expansion = Expansion::from_json(r#"{ "friends": { "args": { "first": 10 }, "name": {} } }"#).unwrap();

        let expected = Expansion::new().expand(
            "friends",
            Expansion::new()
                .with_arguments([("first", 10)])
                .expand("name", Expansion::new()),
        );

        assert_eq!(expansion, expected);

        let friends = expansion.field("friends").unwrap();
        assert_eq!(friends.arguments().unwrap().get("first"), Some(&json!(10)));
        assert!(friends.field("args").is_none());
    }

    #[test]
    fn false_arguments_sentinel() {
        for args in [json!(false), json!("false"), json!(null), json!(12)] {
            let expansion = Expansion::from(json!({ "args": args, "posts": {} }));

            assert!(expansion.arguments().is_none(), "{args} should mean no arguments");
            assert!(expansion.field("posts").is_some());
        }
    }

    #[test]
    fn falsy_fields_are_not_expanded() {
        let expansion = Expansion::from(json!({ "posts": false, "friends": null, "comments": true }));

        assert!(expansion.field("posts").is_none());
        assert!(expansion.field("friends").is_none());
        assert!(expansion.field("comments").unwrap().is_empty());
    }

    #[test]
    fn argument_order_is_preserved() {
        let expansion = Expansion::from_json(r#"{ "args": { "last": 5, "after": "abc", "first": 1 } }"#).unwrap();

        let names = expansion.arguments().unwrap().keys().map(String::as_str).collect::<Vec<_>>();

        assert_eq!(names, ["last", "after", "first"]);
    }

    #[test]
    fn malformed_json() {
        let error = Expansion::from_json("{ friends: }").unwrap_err();

        assert!(matches!(error, Error::InvalidExpansion(_)));
    }
}
