mod class;
mod field;

pub use class::*;
pub use field::*;

use crate::{
    prelude::*,
    types::{erase_generics, is_primitive, is_universal_root},
    validate::validate_classes,
};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// NodeError
///

#[derive(Debug, ThisError)]
pub enum NodeError {
    #[error("class '{0}' is already defined")]
    DuplicateClass(String),

    #[error("class '{name}' (supertype of '{referenced_by}') not found in schema")]
    UnknownClass { name: String, referenced_by: String },
}

///
/// Schema
/// Every known class, keyed by qualified name.
///

#[derive(Clone, Debug, Default)]
pub struct Schema {
    classes: BTreeMap<String, ClassDescriptor>,
}

impl Schema {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            classes: BTreeMap::new(),
        }
    }

    /// Build a schema from descriptors, rejecting structural problems.
    pub fn from_classes(classes: Vec<ClassDescriptor>) -> Result<Self, ErrorTree> {
        validate_classes(&classes)?;

        let mut schema = Self::new();
        for class in classes {
            schema.classes.insert(class.qualified_name(), class);
        }

        Ok(schema)
    }

    pub fn insert(&mut self, class: ClassDescriptor) -> Result<(), NodeError> {
        let key = class.qualified_name();
        if self.classes.contains_key(&key) {
            return Err(NodeError::DuplicateClass(key));
        }
        self.classes.insert(key, class);

        Ok(())
    }

    #[must_use]
    pub fn get_class(&self, qualified_name: &str) -> Option<&ClassDescriptor> {
        self.classes.get(qualified_name)
    }

    /// All classes in qualified-name order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDescriptor> {
        self.classes.values()
    }

    /// Classes carrying the generate tag, whatever their kind.
    pub fn annotated(&self) -> impl Iterator<Item = &ClassDescriptor> {
        self.classes().filter(|class| class.generate_dto)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    // resolve
    // a simple name is tried within the referrer's package before the bare key
    fn resolve(&self, from: &ClassDescriptor, name: &str) -> Option<&ClassDescriptor> {
        if !from.package.is_empty()
            && !name.contains('.')
            && let Some(class) = self.classes.get(&format!("{}.{name}", from.package))
        {
            return Some(class);
        }

        self.classes.get(name)
    }
}

impl MetadataProvider for Schema {
    fn supertype<'a>(
        &'a self,
        class: &ClassDescriptor,
    ) -> Result<Option<&'a ClassDescriptor>, NodeError> {
        let Some(extends) = class.extends.as_deref() else {
            return Ok(None);
        };

        let name = erase_generics(extends);
        if name.is_empty() || is_universal_root(name) || is_primitive(name) {
            return Ok(None);
        }

        self.resolve(class, name)
            .map(Some)
            .ok_or_else(|| NodeError::UnknownClass {
                name: name.to_string(),
                referenced_by: class.qualified_name(),
            })
    }
}
