//! The wrappers put around an expanded relation.
//!
//! ```graphql
//! friends(first: 10) {
//!   name
//! }
//! comments {
//!   edges {
//!     node {
//!       body
//!     }
//!   }
//! }
//! ```

const INDENT: &str = "  ";

/// `field(args) { body }` for a list of objects.
pub fn list_fragment(field_name: &str, arguments: &str, body: &str) -> String {
    block(&format!("{field_name}{arguments}"), body)
}

/// `field(args) { body }` for a single object.
pub fn object_fragment(field_name: &str, arguments: &str, body: &str) -> String {
    block(&format!("{field_name}{arguments}"), body)
}

/// `field(args) { edges { node { body } } }`.
pub fn connection_fragment(field_name: &str, arguments: &str, body: &str) -> String {
    let node = block("node", body);
    let edges = block("edges", &node);

    block(&format!("{field_name}{arguments}"), &edges)
}

/// `fragment Name on Type { body }`, ready to be embedded in a document.
pub fn fragment_definition(fragment_name: &str, type_name: &str, body: &str) -> String {
    block(&format!("fragment {fragment_name} on {type_name}"), body)
}

fn block(header: &str, body: &str) -> String {
    let mut out = String::with_capacity(header.len() + body.len() + 8);

    out.push_str(header);
    out.push_str(" {\n");

    for line in body.lines() {
        out.push_str(INDENT);
        out.push_str(line);
        out.push('\n');
    }

    out.push('}');
    out
}
