//! Filename sanitization for metadata-derived names.

/// Characters that never survive into a derived filename.
const FORBIDDEN: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|', '.', ','];

/// Strips characters unsafe for filesystem names and replaces spaces
/// with underscores.
///
/// Forbidden characters (`\ / * ? : " < > | . ,`) are removed entirely,
/// not replaced. Total over all input strings; the output is never
/// longer than the input.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !FORBIDDEN.contains(c))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_forbidden_characters() {
        assert_eq!(sanitize_filename(r#"a\b/c*d?e:f"g<h>i|j"#), "abcdefghij");
    }

    #[test]
    fn test_removes_dots_and_commas() {
        assert_eq!(sanitize_filename("Report, Final."), "Report_Final");
    }

    #[test]
    fn test_replaces_spaces_with_underscores() {
        assert_eq!(sanitize_filename("Jane Doe"), "Jane_Doe");
        assert_eq!(sanitize_filename("a  b"), "a__b");
    }

    #[test]
    fn test_plain_name_unchanged() {
        assert_eq!(sanitize_filename("Dune"), "Dune");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize_filename(""), "");
    }

    #[test]
    fn test_all_forbidden_sanitizes_to_empty() {
        assert_eq!(sanitize_filename("..."), "");
        assert_eq!(sanitize_filename(r#"\/*?:"<>|.,"#), "");
    }

    #[test]
    fn test_output_never_grows_and_never_contains_forbidden() {
        let inputs = ["My Book: Vol. 1", "a,b,c", "   ", "über café?", "...---..."];
        for input in inputs {
            let output = sanitize_filename(input);
            assert!(output.chars().count() <= input.chars().count());
            assert!(!output.contains(' '));
            for c in FORBIDDEN {
                assert!(!output.contains(*c), "{output:?} contains {c:?}");
            }
        }
    }
}
