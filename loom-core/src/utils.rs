//! Shared string helpers.

/// Convert a string to PascalCase, treating every non-alphanumeric character
/// as a word boundary (e.g., "north_east" -> "NorthEast", "in-progress" -> "InProgress").
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| !c.is_alphanumeric())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("north"), "North");
        assert_eq!(to_pascal_case("north_east"), "NorthEast");
        assert_eq!(to_pascal_case("in-progress"), "InProgress");
        assert_eq!(to_pascal_case("two words"), "TwoWords");
        assert_eq!(to_pascal_case("2.8"), "28");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case(""), "");
    }
}
