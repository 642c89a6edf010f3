use crate::prelude::*;

///
/// ClassDescriptor
/// Identity and own declared fields of one class. Inherited fields live
/// on the supertype's descriptor, reached through `extends`.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ClassDescriptor {
    pub name: String,

    #[serde(default)]
    pub package: String,

    #[serde(default)]
    pub kind: ClassKind,

    /// The class-level "generate DTO" tag.
    #[serde(default)]
    pub generate_dto: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    #[serde(default, rename = "field", alias = "fields")]
    pub fields: Vec<FieldDescriptor>,
}

impl ClassDescriptor {
    #[must_use]
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn annotated(mut self) -> Self {
        self.generate_dto = true;
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: ClassKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn extends(mut self, supertype: impl Into<String>) -> Self {
        self.extends = Some(supertype.into());
        self
    }

    #[must_use]
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    // qualified_name
    // the default package has no prefix
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}
