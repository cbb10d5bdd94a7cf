//! Span lookup and checks for table files.

use miette::SourceSpan;
use typeloom_core::ScalarKind;

/// Find the span of a table key in the TOML source.
/// Searches for `name =`, `"name" =` and `[name]` before falling back to any occurrence.
pub(crate) fn find_key_span(src: &str, name: &str) -> Option<SourceSpan> {
    let patterns = [
        format!("\"{}\"", name),
        format!("{} =", name),
        format!("{}=", name),
        format!("[{}]", name),
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            let start = pos + pattern.find(name).unwrap_or(0);
            return Some(SourceSpan::from((start, name.len())));
        }
    }

    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}

/// Find the span of `value` on the line that assigns to `key`.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        if line.contains(key) {
            if let Some(pos) = line.rfind(value) {
                return Some(SourceSpan::from((offset + pos, value.len())));
            }
        }
        offset += line.len();
    }
    find_key_span(src, value)
}

/// Comma-separated list of valid scalar kind names, for diagnostics.
pub(crate) fn scalar_kind_names() -> String {
    ScalarKind::ALL
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check a target type name. Returns `Some(reason)` if it cannot be used.
pub(crate) fn check_type_name(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        return Some("type name cannot be empty");
    }
    if name.trim() != name {
        return Some("type name cannot have leading or trailing whitespace");
    }
    if name.contains(['<', '>', ',']) {
        return Some("type name cannot contain generic delimiters");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_key_span() {
        let src = "[types]\nfloat = \"System.Double?\"\n";
        let span = find_key_span(src, "float").unwrap();
        assert_eq!(span.offset(), 8);
        assert_eq!(span.len(), 5);

        let quoted = "[scalars]\n\"System.Half\" = \"float\"\n";
        let span = find_key_span(quoted, "System.Half").unwrap();
        assert_eq!(span.offset(), 11);
    }

    #[test]
    fn test_find_value_span() {
        let src = "[scalars]\n\"System.Half\" = \"half\"\n";
        let span = find_value_span(src, "System.Half", "half").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "half");
    }

    #[test]
    fn test_check_type_name() {
        assert_eq!(check_type_name("System.Int32?"), None);
        assert!(check_type_name("").is_some());
        assert!(check_type_name(" int").is_some());
        assert!(check_type_name("List<int>").is_some());
    }
}
