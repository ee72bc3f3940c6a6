//! Record parser for concept listing lines.
//!
//! Each record has the shape `<path> <tag>;<tag>;...`, where a tag is either
//! `Primary` or `Primary^Secondary`. The parser is a pure function of one line.

use crate::{ConceptAssociation, Diagnostic, DiagnosticSeverity, SecondaryKey, SourceLocation};

/// Separator between tags in the tag list.
pub const TAG_SEPARATOR: char = ';';
/// Separator between the primary and secondary key of one tag.
pub const KEY_SEPARATOR: char = '^';

/// Everything one input line produced.
#[derive(Debug, Clone, Default)]
pub struct ParsedLine {
    /// Associations from every well-formed tag, in tag order.
    pub associations: Vec<ConceptAssociation>,
    /// Problems with the remaining tags.
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse one record, reporting malformed tags against `location`.
///
/// Blank lines yield nothing. A tag with more than two `^` segments keeps
/// its first two segments and adds a warning; later tags are unaffected.
pub fn parse_line(line: &str, location: &SourceLocation) -> ParsedLine {
    let mut parsed = ParsedLine::default();

    let mut fields = line.split_whitespace();
    let Some(target_path) = fields.next() else {
        return parsed;
    };
    let tag_list = fields.collect::<Vec<_>>().join(" ");
    let link_label = derive_link_label(target_path);

    for tag in tag_list.split(TAG_SEPARATOR) {
        if tag.trim().is_empty() {
            continue;
        }

        let segments: Vec<&str> = tag.split(KEY_SEPARATOR).collect();
        if segments.len() > 2 {
            parsed.diagnostics.push(Diagnostic {
                severity: DiagnosticSeverity::Warn,
                message: format!("more than 2 levels of keys specified in {target_path}"),
                location: location.clone(),
                line: line.to_string(),
            });
        }

        let primary_key = segments[0].trim();
        if primary_key.is_empty() {
            continue;
        }

        parsed.associations.push(ConceptAssociation {
            primary_key: primary_key.to_string(),
            secondary_key: SecondaryKey::from_segment(segments.get(1).copied()),
            link_label: link_label.clone(),
            target_path: target_path.to_string(),
        });
    }

    parsed
}

/// Parse one record without tracking where it came from.
pub fn parse_record(line: &str) -> Vec<ConceptAssociation> {
    parse_line(line, &SourceLocation::new("<input>", 1)).associations
}

/// Link text for a target path.
///
/// Manual pages (`.html`) are labelled with their file stem, i.e. the final
/// path segment up to its first dot. Every other path is its own label.
///
/// ```rust
/// use helpidx_core::parser::derive_link_label;
///
/// assert_eq!(derive_link_label("man/Vec/VecCreate.html"), "VecCreate");
/// assert_eq!(derive_link_label("src/vec/examples/ex1.c"), "src/vec/examples/ex1.c");
/// ```
pub fn derive_link_label(target_path: &str) -> String {
    match target_path.rsplit_once('.') {
        Some((_, "html")) => {
            let file_name = target_path.rsplit('/').next().unwrap_or(target_path);
            file_name.split('.').next().unwrap_or(file_name).to_string()
        },
        _ => target_path.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn loc() -> SourceLocation {
        SourceLocation::new("exampleconcepts", 7)
    }

    #[test]
    fn test_primary_and_secondary_tags() {
        let parsed = parse_line("src/ex1.c k1;k2^s2", &loc());

        assert!(parsed.diagnostics.is_empty());
        assert_eq!(parsed.associations.len(), 2);

        let first = &parsed.associations[0];
        assert_eq!(first.primary_key, "k1");
        assert_eq!(first.secondary_key, SecondaryKey::Unkeyed);

        let second = &parsed.associations[1];
        assert_eq!(second.primary_key, "k2");
        assert_eq!(second.secondary_key, SecondaryKey::Named("s2".into()));

        for assoc in &parsed.associations {
            assert_eq!(assoc.link_label, "src/ex1.c");
            assert_eq!(assoc.target_path, "src/ex1.c");
        }
    }

    #[test]
    fn test_html_label_uses_file_stem() {
        let assocs = parse_record("man/Foo.html Bar");
        assert_eq!(assocs.len(), 1);
        assert_eq!(assocs[0].link_label, "Foo");
        assert_eq!(assocs[0].target_path, "man/Foo.html");
    }

    #[test]
    fn test_derive_link_label_variants() {
        assert_eq!(derive_link_label("Foo.html"), "Foo");
        assert_eq!(derive_link_label("man/Vec.Create.html"), "Vec");
        assert_eq!(derive_link_label("man/Foo.htm"), "man/Foo.htm");
        assert_eq!(derive_link_label("man/Foo.HTML"), "man/Foo.HTML");
        assert_eq!(derive_link_label("ex1"), "ex1");
    }

    #[test]
    fn test_keys_are_trimmed_and_whitespace_collapsed() {
        let assocs = parse_record("  ex2   Distributed   arrays ^  ghost  points ;  ");
        assert_eq!(assocs.len(), 1);
        assert_eq!(assocs[0].primary_key, "Distributed arrays");
        assert_eq!(
            assocs[0].secondary_key,
            SecondaryKey::Named("ghost points".into())
        );
    }

    #[test]
    fn test_blank_lines_yield_nothing() {
        assert!(parse_record("").is_empty());
        assert!(parse_record("   \t ").is_empty());
        assert!(parse_record("path/only").is_empty());
    }

    #[test]
    fn test_empty_tags_and_primaries_skipped() {
        let parsed = parse_line("ex3 ;; ^orphan ; Real", &loc());
        assert!(parsed.diagnostics.is_empty());
        assert_eq!(parsed.associations.len(), 1);
        assert_eq!(parsed.associations[0].primary_key, "Real");
    }

    #[test]
    fn test_too_many_levels_is_not_fatal() {
        let parsed = parse_line("ex4 A^B^C;D", &loc());

        assert_eq!(parsed.diagnostics.len(), 1);
        let diag = &parsed.diagnostics[0];
        assert_eq!(diag.severity, DiagnosticSeverity::Warn);
        assert!(diag.message.contains("ex4"));
        assert_eq!(diag.location, loc());
        assert_eq!(diag.line, "ex4 A^B^C;D");

        assert_eq!(parsed.associations.len(), 2);
        assert_eq!(parsed.associations[0].primary_key, "A");
        assert_eq!(
            parsed.associations[0].secondary_key,
            SecondaryKey::Named("B".into())
        );
        assert_eq!(parsed.associations[1].primary_key, "D");
    }

    #[test]
    fn test_empty_secondary_segment_is_named() {
        let assocs = parse_record("ex5 Alpha^");
        assert_eq!(assocs[0].secondary_key, SecondaryKey::Named(String::new()));
    }
}
