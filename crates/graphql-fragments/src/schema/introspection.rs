use super::{FieldDefinition, InputValueDefinition, SchemaTypeMap, TypeDescriptor, TypeKind, TypeRef};
use crate::Error;

/// Either a full GraphQL response or its bare `data` object.
#[derive(Debug, serde::Deserialize)]
struct Document {
    data: Option<Data>,
    #[serde(rename = "__schema")]
    schema: Option<Schema>,
}

#[derive(Debug, serde::Deserialize)]
struct Data {
    #[serde(rename = "__schema")]
    schema: Option<Schema>,
}

#[derive(Debug, serde::Deserialize)]
struct Schema {
    types: Vec<FullType>,
}

#[derive(Debug, serde::Deserialize)]
struct FullType {
    kind: TypeKind,
    name: String,
    #[serde(default)]
    fields: Option<Vec<Field>>,
}

#[derive(Debug, serde::Deserialize)]
struct Field {
    name: String,
    #[serde(default)]
    args: Vec<InputValue>,
    #[serde(rename = "type")]
    ty: IntrospectedTypeRef,
}

#[derive(Debug, serde::Deserialize)]
struct InputValue {
    name: String,
    #[serde(rename = "type")]
    ty: IntrospectedTypeRef,
}

#[derive(Debug, serde::Deserialize)]
#[serde(try_from = "RawTypeRef")]
struct IntrospectedTypeRef(TypeRef);

#[derive(Debug, serde::Deserialize)]
struct RawTypeRef {
    kind: TypeKind,
    name: Option<String>,
    #[serde(rename = "ofType")]
    of_type: Option<Box<RawTypeRef>>,
}

impl TryFrom<RawTypeRef> for IntrospectedTypeRef {
    type Error = String;

    fn try_from(raw: RawTypeRef) -> Result<Self, Self::Error> {
        fn convert(raw: RawTypeRef) -> Result<TypeRef, String> {
            match raw.kind {
                TypeKind::List | TypeKind::NonNull => {
                    let Some(of_type) = raw.of_type else {
                        return Err(format!("a {} type reference is missing its ofType", raw.kind));
                    };
                    let inner = convert(*of_type)?;

                    Ok(if raw.kind == TypeKind::List {
                        TypeRef::list(inner)
                    } else {
                        TypeRef::non_null(inner)
                    })
                }
                kind => raw
                    .name
                    .map(TypeRef::Named)
                    .ok_or_else(|| format!("a {kind} type reference is missing its name")),
            }
        }

        convert(raw).map(IntrospectedTypeRef)
    }
}

/// Parses the result of a standard introspection query.
///
/// Accepts both a full response (`{"data": {"__schema": ...}}`) and a bare data
/// object (`{"__schema": ...}`). Returns `Ok(None)` when the document carries no
/// schema at all, e.g. a response with `"data": null`.
pub fn parse_introspection(json: &str) -> Result<Option<SchemaTypeMap>, Error> {
    let document: Document = serde_json::from_str(json).map_err(Error::InvalidIntrospection)?;

    let Some(schema) = document.schema.or_else(|| document.data.and_then(|data| data.schema)) else {
        return Ok(None);
    };

    let types = schema
        .types
        .into_iter()
        .map(|full_type| TypeDescriptor {
            name: full_type.name,
            kind: full_type.kind,
            fields: full_type
                .fields
                .unwrap_or_default()
                .into_iter()
                .map(|field| FieldDefinition {
                    name: field.name,
                    ty: field.ty.0,
                    args: field
                        .args
                        .into_iter()
                        .map(|arg| InputValueDefinition {
                            name: arg.name,
                            ty: arg.ty.0,
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    Ok(Some(types))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const USER_SCHEMA: &str = indoc! {r#"
        {
          "data": {
            "__schema": {
              "types": [
                {
                  "kind": "OBJECT",
                  "name": "User",
                  "fields": [
                    {
                      "name": "id",
                      "args": [],
                      "type": { "kind": "NON_NULL", "name": null, "ofType": { "kind": "SCALAR", "name": "ID", "ofType": null } }
                    },
                    {
                      "name": "posts",
                      "args": [
                        { "name": "first", "type": { "kind": "SCALAR", "name": "Int", "ofType": null } }
                      ],
                      "type": {
                        "kind": "LIST",
                        "name": null,
                        "ofType": { "kind": "NON_NULL", "name": null, "ofType": { "kind": "OBJECT", "name": "Post", "ofType": null } }
                      }
                    }
                  ]
                },
                { "kind": "SCALAR", "name": "ID", "fields": null },
                { "kind": "ENUM", "name": "Role" }
              ]
            }
          }
        }
    "#};

    #[test]
    fn full_response() {
        let types = parse_introspection(USER_SCHEMA).unwrap().unwrap();

        assert_eq!(types.len(), 3);

        let user = types.get("User").unwrap();
        assert_eq!(user.kind, TypeKind::Object);
        assert_eq!(user.fields.len(), 2);

        let posts = user.field("posts").unwrap();
        assert_eq!(posts.ty.to_string(), "[Post!]");
        assert_eq!(posts.args[0].name, "first");
        assert_eq!(posts.args[0].ty, TypeRef::named("Int"));

        assert!(types.get("Role").unwrap().fields.is_empty());
    }

    #[test]
    fn bare_data_object() {
        let json = r#"{ "__schema": { "types": [{ "kind": "OBJECT", "name": "Query", "fields": [] }] } }"#;
        let types = parse_introspection(json).unwrap().unwrap();

        assert_eq!(types.get("Query").map(|ty| ty.kind), Some(TypeKind::Object));
    }

    #[test]
    fn null_data_has_no_schema() {
        assert!(parse_introspection(r#"{ "data": null }"#).unwrap().is_none());
        assert!(parse_introspection("{}").unwrap().is_none());
    }

    #[test]
    fn list_reference_without_of_type() {
        let json = r#"{ "__schema": { "types": [{
            "kind": "OBJECT",
            "name": "Query",
            "fields": [{ "name": "users", "type": { "kind": "LIST", "name": null, "ofType": null } }]
        }] } }"#;

        let error = parse_introspection(json).unwrap_err();

        assert!(matches!(error, Error::InvalidIntrospection(_)));
        assert!(error.to_string().contains("a LIST type reference is missing its ofType"));
    }
}
