use crate::prelude::*;

///
/// FieldDescriptor
/// One declared field with the tags attached to it.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    /// Membership tags, one group name each.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dto: Vec<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub secret: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<Relation>,
}

impl FieldDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Self::default()
        }
    }

    /// Add a membership tag.
    #[must_use]
    pub fn in_dto(mut self, group: impl Into<String>) -> Self {
        self.dto.push(group.into());
        self
    }

    #[must_use]
    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    #[must_use]
    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relation = Some(relation);
        self
    }
}

///
/// Relation
/// Marks a field whose value is another entity. DTOs keep only the
/// related entity's identifier.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Relation {
    /// Identifier field name on the related type.
    pub id_field: String,

    /// Qualified name of the related type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_type: Option<String>,

    #[serde(default = "default_id_type")]
    pub id_type: String,

    #[serde(default)]
    pub collection: bool,
}

impl Relation {
    #[must_use]
    pub fn new(id_field: impl Into<String>, related_type: impl Into<String>) -> Self {
        Self {
            id_field: id_field.into(),
            related_type: Some(related_type.into()),
            id_type: default_id_type(),
            collection: false,
        }
    }

    #[must_use]
    pub fn id_type(mut self, id_type: impl Into<String>) -> Self {
        self.id_type = id_type.into();
        self
    }

    #[must_use]
    pub fn collection(mut self) -> Self {
        self.collection = true;
        self
    }

    /// Related type, treating blank text as absent.
    #[must_use]
    pub fn related_type(&self) -> Option<&str> {
        self.related_type
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Identifier type, treating blank text as absent.
    #[must_use]
    pub fn resolved_id_type(&self) -> Option<&str> {
        Some(self.id_type.trim()).filter(|s| !s.is_empty())
    }
}

fn default_id_type() -> String {
    DEFAULT_ID_TYPE.to_string()
}
