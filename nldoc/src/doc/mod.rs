//! Scans source lines for doc comments and procedure definitions,
//! producing a populated [`ModuleDoc`].
//!
//! The scanner is a single pass over the lines. It starts in the header
//! state, reading module metadata from the leading run of `;;; ` comments,
//! and then walks the rest of the file looking for `to`/`to-report`
//! definitions, attaching the comment block that immediately follows each
//! one to the new [`Method`].

pub mod module;

pub use module::{Author, HeaderAttrs, Method, ModuleDoc, Param};

use regex::Regex;
use tracing::warn;

/// Prefix that marks a documentation comment line.
const DOC_COMMENT: &str = ";;; ";

/// Builds a [`ModuleDoc`] from the source lines of a model file.
pub fn scan_lines(lines: &[&str]) -> ModuleDoc {
    let param_tag = Regex::new(r"^;;; @param ([a-zA-Z0-9_\-]+) ?([a-zA-Z0-9_\- ]*)").unwrap();
    let report_tag = Regex::new(r"^;;; @report ([a-zA-Z0-9_\-] ?[a-zA-Z0-9_\- ]*)").unwrap();

    let mut name = None;
    let mut first_comment_seen = false;
    let mut attrs = HeaderAttrs::default();
    let mut methods = Vec::new();
    let mut in_header = true;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        if in_header && line.starts_with(DOC_COMMENT) {
            if !first_comment_seen {
                // The first header comment is the module name, whatever it
                // says.
                first_comment_seen = true;
                name = Some(line.trim_start_matches(';').trim().to_string());
            } else if let Some(tag) = line[DOC_COMMENT.len()..].trim().strip_prefix('@') {
                let (key, value) = tag.split_once(' ').unwrap_or((tag, ""));
                attrs.insert(key, value.to_string());
            }
            // header comment lines without a tag carry no metadata
            i += 1;
        } else if is_definition(line) {
            in_header = false;
            let Some(procedure) = line.split_whitespace().nth(1) else {
                warn!("skipping procedure definition without a name: `{line}`");
                i += 1;
                continue;
            };
            let (method, next) = scan_method(procedure, lines, i + 1, &param_tag, &report_tag);
            methods.push(method);
            i = next;
        } else {
            in_header = false;
            i += 1;
        }
    }

    ModuleDoc {
        name,
        version: attrs.version,
        date: attrs.date,
        author: Author {
            name: attrs.author,
            email: attrs.email,
        },
        methods,
    }
}

/// Both definition keywords introduce a documentable procedure; only the
/// `@report` tag distinguishes a reporter's output.
fn is_definition(line: &str) -> bool {
    line.starts_with("to ") || line.starts_with("to-report ")
}

/// Consumes the comment block following a definition line, starting at
/// `start`. Returns the populated method and the index of the first line
/// past the block; the procedure body itself is never inspected.
fn scan_method(
    name: &str,
    lines: &[&str],
    start: usize,
    param_tag: &Regex,
    report_tag: &Regex,
) -> (Method, usize) {
    let mut method = Method {
        name: name.to_string(),
        ..Default::default()
    };
    let mut i = start;
    while i < lines.len() {
        let line = lines[i].trim();
        if !line.starts_with(DOC_COMMENT) {
            break;
        }
        if line.starts_with(";;; @") {
            if let Some(caps) = param_tag.captures(line) {
                method.params.push(Param {
                    name: caps[1].to_string(),
                    description: caps[2].to_string(),
                });
            } else if let Some(caps) = report_tag.captures(line) {
                method.report = Some(caps[1].to_string());
            }
            // tag lines matching neither pattern carry nothing usable
        } else {
            method.description.push_str(&line[DOC_COMMENT.len()..]);
            method.description.push('\n');
        }
        i += 1;
    }
    (method, i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan(src: &str) -> ModuleDoc {
        let lines: Vec<&str> = src.lines().collect();
        scan_lines(&lines)
    }

    #[test]
    fn header_block_fills_module_metadata() {
        let module = scan(
            "\
;;; Foo
;;; @version 1.0
;;; @author Jane
;;; @email jane@x.com
;;; @date 2020-01-01
",
        );
        assert_eq!(module.name.as_deref(), Some("Foo"));
        assert_eq!(module.version.as_deref(), Some("1.0"));
        assert_eq!(module.date.as_deref(), Some("2020-01-01"));
        assert_eq!(
            module.author,
            Author {
                name: Some("Jane".into()),
                email: Some("jane@x.com".into()),
            }
        );
    }

    #[test]
    fn reporter_block_yields_one_fully_populated_method() {
        let module = scan(
            "\
to-report square
;;; Returns the square of a number.
;;; @param n the number to square
;;; @report the squared value
end
",
        );
        assert_eq!(module.methods.len(), 1);
        let method = &module.methods[0];
        assert_eq!(method.name, "square");
        assert_eq!(method.description, "Returns the square of a number.\n");
        assert_eq!(
            method.params,
            vec![Param {
                name: "n".into(),
                description: "the number to square".into(),
            }]
        );
        assert_eq!(method.report.as_deref(), Some("the squared value"));
    }

    #[test]
    fn module_without_header_has_no_metadata() {
        let module = scan("to setup\nend\n");
        assert_eq!(module.name, None);
        assert_eq!(module.version, None);
        assert_eq!(module.date, None);
        assert_eq!(module.author, Author::default());
    }

    #[test]
    fn undocumented_procedure_yields_an_empty_method() {
        let module = scan("to setup\n  ca\nend\n");
        assert_eq!(module.methods.len(), 1);
        let method = &module.methods[0];
        assert_eq!(method.name, "setup");
        assert_eq!(method.description, "");
        assert_eq!(method.report, None);
        assert!(method.params.is_empty());
    }

    #[test]
    fn methods_and_params_keep_source_order() {
        let module = scan(
            "\
to go
;;; Runs one tick.
;;; @param steps how many steps to take
;;; @param speed how fast to move
;;; @param wiggle how much to wander
end

to-report count-turtles
;;; @report the number of turtles
end
",
        );
        let names: Vec<&str> = module.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["go", "count-turtles"]);
        let params: Vec<&str> = module.methods[0]
            .params
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(params, vec!["steps", "speed", "wiggle"]);
    }

    #[test]
    fn multi_line_descriptions_accumulate_in_order() {
        let module = scan(
            "\
to go
;;; First line.
;;; Second line.
;;; Third line.
end
",
        );
        assert_eq!(
            module.methods[0].description,
            "First line.\nSecond line.\nThird line.\n"
        );
    }

    #[test]
    fn last_report_tag_wins() {
        let module = scan(
            "\
to-report best
;;; @report an early answer
;;; @report the final answer
end
",
        );
        assert_eq!(module.methods[0].report.as_deref(), Some("the final answer"));
    }

    #[test]
    fn attribute_without_value_stores_an_empty_value() {
        let module = scan(";;; Foo\n;;; @version\n");
        assert_eq!(module.version.as_deref(), Some(""));
    }

    #[test]
    fn unrecognized_header_keys_do_not_disturb_metadata() {
        let module = scan(";;; Foo\n;;; @license MIT\n;;; @version 2.0\n");
        assert_eq!(module.name.as_deref(), Some("Foo"));
        assert_eq!(module.version.as_deref(), Some("2.0"));
    }

    #[test]
    fn header_ends_at_the_first_non_comment_line() {
        let module = scan(
            "\
;;; Foo
globals [x]
;;; @version 9.9
to setup
end
",
        );
        assert_eq!(module.name.as_deref(), Some("Foo"));
        // the stray comment after the header is skipped, not collected
        assert_eq!(module.version, None);
        assert_eq!(module.methods.len(), 1);
    }

    #[test]
    fn bare_definition_keyword_is_not_a_definition() {
        let module = scan("to\nend\n");
        assert!(module.methods.is_empty());
    }

    #[test]
    fn comment_run_at_end_of_input_terminates_cleanly() {
        let module = scan("to setup\n;;; Sets things up.");
        assert_eq!(module.methods.len(), 1);
        assert_eq!(module.methods[0].description, "Sets things up.\n");
    }

    #[test]
    fn malformed_tag_lines_are_dropped() {
        let module = scan(
            "\
to go
;;; Moves the turtle.
;;; @param !!! not a valid name
;;; @
end
",
        );
        let method = &module.methods[0];
        assert_eq!(method.description, "Moves the turtle.\n");
        assert!(method.params.is_empty());
    }
}
