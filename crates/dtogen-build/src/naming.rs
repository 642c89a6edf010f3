// capitalize
// upper-cases the first character only; empty names pass through
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Accessor name for a field, `id` -> `getId`.
#[must_use]
pub fn getter(field: &str) -> String {
    format!("get{}", capitalize(field))
}

/// Mutator name for a field, `id` -> `setId`.
#[must_use]
pub fn setter(field: &str) -> String {
    format!("set{}", capitalize(field))
}

/// Generated type name: `<Simple><Group>DTO`, the default group adds nothing.
#[must_use]
pub fn dto_type_name(simple_name: &str, group: &str) -> String {
    format!("{simple_name}{group}DTO")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_first_character_only() {
        assert_eq!(capitalize("firstName"), "FirstName");
        assert_eq!(capitalize("URL"), "URL");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize("_id"), "_id");
    }

    #[test]
    fn empty_name_is_a_no_op() {
        assert_eq!(capitalize(""), "");
        assert_eq!(getter(""), "get");
        assert_eq!(setter(""), "set");
    }

    #[test]
    fn accessors_share_the_derivation() {
        assert_eq!(getter("total"), "getTotal");
        assert_eq!(setter("total"), "setTotal");
    }

    #[test]
    fn type_names_are_bit_exact() {
        assert_eq!(dto_type_name("Order", ""), "OrderDTO");
        assert_eq!(dto_type_name("Order", "Full"), "OrderFullDTO");
        assert_eq!(dto_type_name("Order", "Base"), "OrderBaseDTO");
        assert_eq!(dto_type_name("Order", "Summary"), "OrderSummaryDTO");
    }
}
