//! Field collection and grouping.
//!
//! Walks the inheritance chain of one annotated class and sorts every field
//! into the groups it belongs to. A field is placed:
//!
//! * in each group named by its membership tags, secret or not;
//! * when not secret, in `Full` (plus `Base` for fields declared on the class
//!   itself) if the class has a real supertype, otherwise in the default
//!   group.
//!
//! Fields of the annotated class come first, then each ancestor in turn,
//! keeping declaration order inside a class.

use dtogen_schema::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error as ThisError;

/// Group name of the single DTO generated for classes without a supertype.
pub const DEFAULT_GROUP: &str = "";

/// Own non-secret fields, for classes with a supertype.
pub const BASE_GROUP: &str = "Base";

/// Own and inherited non-secret fields, for classes with a supertype.
pub const FULL_GROUP: &str = "Full";

///
/// CollectError
///

#[derive(Debug, ThisError)]
pub enum CollectError {
    #[error(transparent)]
    NodeError(#[from] NodeError),

    #[error("inheritance cycle: '{class}' reaches '{repeated}' twice")]
    InheritanceCycle { class: String, repeated: String },
}

///
/// Groups
/// Group name -> ordered fields. Group iteration order carries no meaning.
///

#[derive(Clone, Debug, Default)]
pub struct Groups<'a> {
    groups: BTreeMap<String, Vec<&'a FieldDescriptor>>,
}

impl<'a> Groups<'a> {
    #[must_use]
    fn push(mut self, group: &str, field: &'a FieldDescriptor) -> Self {
        self.groups.entry(group.to_string()).or_default().push(field);
        self
    }

    #[must_use]
    pub fn get(&self, group: &str) -> Option<&[&'a FieldDescriptor]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    /// Field names of one group, in order.
    #[must_use]
    pub fn field_names(&self, group: &str) -> Vec<&'a str> {
        self.get(group)
            .unwrap_or_default()
            .iter()
            .map(|f| f.name.as_str())
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a FieldDescriptor])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Collect the groups of one annotated class.
pub fn collect<'a, P>(
    provider: &'a P,
    class: &'a ClassDescriptor,
) -> Result<Groups<'a>, CollectError>
where
    P: MetadataProvider + ?Sized,
{
    let chain = lineage(provider, class)?;
    let has_supertype = chain.len() > 1;

    let groups = chain
        .into_iter()
        .enumerate()
        .flat_map(|(depth, current)| {
            provider
                .declared_fields(current)
                .iter()
                .map(move |field| (depth == 0, field))
        })
        .fold(Groups::default(), |groups, (own, field)| {
            place(provider, groups, field, has_supertype, own)
        });

    Ok(groups)
}

// place
// one field into every group it belongs to
fn place<'a, P>(
    provider: &P,
    groups: Groups<'a>,
    field: &'a FieldDescriptor,
    has_supertype: bool,
    own: bool,
) -> Groups<'a>
where
    P: MetadataProvider + ?Sized,
{
    let mut groups = provider
        .membership_tags(field)
        .iter()
        .fold(groups, |groups, tag| groups.push(tag, field));

    if provider.is_secret(field) {
        return groups;
    }

    if has_supertype {
        groups = groups.push(FULL_GROUP, field);
        if own {
            groups = groups.push(BASE_GROUP, field);
        }
    } else {
        groups = groups.push(DEFAULT_GROUP, field);
    }

    groups
}

// lineage
// the class followed by its ancestors, most derived first
fn lineage<'a, P>(
    provider: &'a P,
    class: &'a ClassDescriptor,
) -> Result<Vec<&'a ClassDescriptor>, CollectError>
where
    P: MetadataProvider + ?Sized,
{
    let mut chain = vec![class];
    let mut seen = BTreeSet::from([provider.qualified_name(class)]);
    let mut current = class;

    while let Some(parent) = provider.supertype(current)? {
        let name = provider.qualified_name(parent);
        if !seen.insert(name.clone()) {
            return Err(CollectError::InheritanceCycle {
                class: provider.qualified_name(class),
                repeated: name,
            });
        }

        chain.push(parent);
        current = parent;
    }

    Ok(chain)
}

///
/// TESTS
///
