use crate::node::{ClassDescriptor, FieldDescriptor, NodeError, Relation};

///
/// MetadataProvider
///
/// Read-only view of class metadata. Only `supertype` needs a backend;
/// the per-field and per-class queries default to reading the descriptor.
///

pub trait MetadataProvider {
    /// The direct supertype, or `None` at the universal root or a primitive.
    fn supertype<'a>(
        &'a self,
        class: &ClassDescriptor,
    ) -> Result<Option<&'a ClassDescriptor>, NodeError>;

    fn declared_fields<'a>(&self, class: &'a ClassDescriptor) -> &'a [FieldDescriptor] {
        &class.fields
    }

    fn membership_tags<'a>(&self, field: &'a FieldDescriptor) -> &'a [String] {
        &field.dto
    }

    fn is_secret(&self, field: &FieldDescriptor) -> bool {
        field.secret
    }

    fn relation<'a>(&self, field: &'a FieldDescriptor) -> Option<&'a Relation> {
        field.relation.as_ref()
    }

    fn package_of<'a>(&self, class: &'a ClassDescriptor) -> &'a str {
        &class.package
    }

    fn qualified_name(&self, class: &ClassDescriptor) -> String {
        class.qualified_name()
    }

    fn simple_name<'a>(&self, class: &'a ClassDescriptor) -> &'a str {
        &class.name
    }
}
