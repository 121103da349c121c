use cynic_parser::{common::WrappingType, type_system as ast};

use super::{FieldDefinition, InputValueDefinition, SchemaTypeMap, TypeDescriptor, TypeKind, TypeRef};
use crate::Error;

/// Parses a GraphQL SDL document into a type map.
///
/// Fields declared in `extend type` blocks are appended to the extended type.
/// Built-in scalars do not have to be declared: any name missing from the map
/// is treated as a scalar when the graph is built.
pub fn parse_sdl(sdl: &str) -> Result<SchemaTypeMap, Error> {
    let document = cynic_parser::parse_type_system_document(sdl).map_err(|err| Error::InvalidSdl {
        message: err.to_string(),
    })?;

    let mut types = SchemaTypeMap::default();

    for definition in document.definitions() {
        let (definition, is_extension) = match definition {
            ast::Definition::Type(definition) => (definition, false),
            ast::Definition::TypeExtension(definition) => (definition, true),
            _ => continue,
        };

        let descriptor = type_descriptor(definition);

        match types.get_mut(&descriptor.name) {
            Some(existing) if is_extension => existing.fields.extend(descriptor.fields),
            _ => types.insert(descriptor),
        }
    }

    Ok(types)
}

fn type_descriptor(definition: ast::TypeDefinition<'_>) -> TypeDescriptor {
    let name = definition.name();

    match definition {
        ast::TypeDefinition::Object(object) => TypeDescriptor {
            name: name.to_owned(),
            kind: TypeKind::Object,
            fields: object.fields().map(field_definition).collect(),
        },
        ast::TypeDefinition::Interface(interface) => TypeDescriptor {
            name: name.to_owned(),
            kind: TypeKind::Interface,
            fields: interface.fields().map(field_definition).collect(),
        },
        ast::TypeDefinition::Scalar(_) => TypeDescriptor::new(name, TypeKind::Scalar),
        ast::TypeDefinition::Union(_) => TypeDescriptor::new(name, TypeKind::Union),
        ast::TypeDefinition::Enum(_) => TypeDescriptor::new(name, TypeKind::Enum),
        ast::TypeDefinition::InputObject(_) => TypeDescriptor::new(name, TypeKind::InputObject),
    }
}

fn field_definition(field: ast::FieldDefinition<'_>) -> FieldDefinition {
    FieldDefinition {
        name: field.name().to_owned(),
        ty: type_ref(field.ty()),
        args: field
            .arguments()
            .map(|argument| InputValueDefinition {
                name: argument.name().to_owned(),
                ty: type_ref(argument.ty()),
            })
            .collect(),
    }
}

fn type_ref(ty: ast::Type<'_>) -> TypeRef {
    // Wrappers are listed from the outermost one inwards.
    let wrappers = ty.wrappers().collect::<Vec<_>>();

    wrappers
        .into_iter()
        .rev()
        .fold(TypeRef::named(ty.name()), |inner, wrapper| match wrapper {
            WrappingType::NonNull => TypeRef::non_null(inner),
            WrappingType::List => TypeRef::list(inner),
        })
}
