//! Naming conventions for generated identifiers.

/// Language-specific naming conventions.
///
/// Defines how to turn schema names and enum values into identifiers, and
/// how to handle reserved words.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform an enum value to a member name (e.g., "north-east" -> "NorthEast")
    pub enum_member: fn(&str) -> String,
    /// Transform a schema field name to a property name
    pub property: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "@class" in C#)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as an enum member name.
    pub fn enum_member_name(&self, value: &str) -> String {
        let transformed = (self.enum_member)(value);
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a property name.
    pub fn property_name(&self, name: &str) -> String {
        let transformed = (self.property)(name);
        self.safe_name(&transformed)
    }
}

#[cfg(test)]
mod tests {
    use typeloom_core::to_pascal_case;

    use super::*;

    fn escape_with_at(name: &str) -> String {
        format!("@{}", name)
    }

    const NAMING: NamingConvention = NamingConvention {
        enum_member: to_pascal_case,
        property: to_pascal_case,
        reserved_words: &["Class", "Object"],
        escape_reserved: escape_with_at,
    };

    #[test]
    fn test_enum_member_name() {
        assert_eq!(NAMING.enum_member_name("north"), "North");
        assert_eq!(NAMING.enum_member_name("class"), "@Class");
    }

    #[test]
    fn test_property_name() {
        assert_eq!(NAMING.property_name("pet_id"), "PetId");
        assert_eq!(NAMING.property_name("object"), "@Object");
        assert!(!NAMING.is_reserved("class"));
    }
}
