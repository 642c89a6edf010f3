/// Ensure a class name is a usable identifier.
pub fn validate_class_name(name: &str) -> Result<(), String> {
    let Some(first) = name.chars().next() else {
        return Err("class name is empty".to_string());
    };

    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return Err(format!("class name '{name}' must start with a letter"));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_alphanumeric() || *c == '_' || *c == '$'))
    {
        return Err(format!("class name '{name}' contains '{bad}'"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_malformed_names() {
        assert!(validate_class_name("").is_err());
        assert!(validate_class_name("1Order").is_err());
        assert!(validate_class_name("Order.Line").is_err());
    }

    #[test]
    fn accepts_identifiers() {
        assert!(validate_class_name("Order").is_ok());
        assert!(validate_class_name("_Order$Line2").is_ok());
    }
}
