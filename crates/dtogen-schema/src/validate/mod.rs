mod naming;

use crate::{err, prelude::*};
use std::collections::BTreeSet;

pub use naming::validate_class_name;

/// Structural checks over a batch of class descriptors.
///
/// Only problems that make the schema itself ambiguous are rejected here.
/// Unknown supertypes and incomplete relations are left to generation so
/// they fail a single class instead of the whole load.
pub fn validate_classes(classes: &[ClassDescriptor]) -> Result<(), ErrorTree> {
    let mut errs = ErrorTree::new();
    let mut seen = BTreeSet::new();

    for class in classes {
        let route = class.qualified_name();

        if let Err(msg) = validate_class_name(&class.name) {
            errs.add_at(&route, msg);
        }

        if !seen.insert(route.clone()) {
            err!(errs, "class '{route}' is defined more than once");
        }

        errs.merge_at(&route, validate_fields(class));
    }

    errs.result()
}

// validate_fields
fn validate_fields(class: &ClassDescriptor) -> ErrorTree {
    let mut errs = ErrorTree::new();
    let mut names = BTreeSet::new();

    for field in &class.fields {
        if !names.insert(field.name.as_str()) {
            err!(errs, "duplicate field '{}'", field.name);
        }
    }

    errs
}
