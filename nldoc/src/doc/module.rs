//! Data model for extracted documentation.

use std::collections::BTreeMap;
use std::fmt;

/// The author of a model, collected from the `@author` and `@email` header
/// tags. A model has at most one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.name.as_deref().unwrap_or("unknown"),
            self.email.as_deref().unwrap_or("no e-mail")
        )
    }
}

/// One parameter of a procedure, from an `@param` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub description: String,
}

/// One documented procedure: a `to` command or a `to-report` reporter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    /// Free-text comment lines, accumulated verbatim with a trailing
    /// newline each.
    pub description: String,
    /// Return-value description from an `@report` tag.
    pub report: Option<String>,
    /// Parameters in source declaration order.
    pub params: Vec<Param>,
}

impl Method {
    /// First line of the description, used in the overview table.
    pub fn first_line(&self) -> &str {
        self.description.lines().next().unwrap_or_default()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}. Takes {} parameter(s)",
            self.name,
            self.description.trim_end(),
            self.params.len()
        )?;
        if self.params.is_empty() {
            write!(f, ".")
        } else {
            let params = self
                .params
                .iter()
                .map(|param| format!("{} ({})", param.name, param.description))
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, ": {params}")
        }
    }
}

/// Module-level attributes collected while parsing the header comment
/// block. Recognized keys get named fields; anything else lands in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderAttrs {
    pub version: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub email: Option<String>,
    pub extra: BTreeMap<String, String>,
}

impl HeaderAttrs {
    /// Stores an `@key value` pair. Recognized keys are matched
    /// case-sensitively; unrecognized keys are silently kept in the side
    /// map.
    pub fn insert(&mut self, key: &str, value: String) {
        match key {
            "version" => self.version = Some(value),
            "date" => self.date = Some(value),
            "author" => self.author = Some(value),
            "email" => self.email = Some(value),
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
    }
}

/// A whole documented model: header metadata plus the procedures in source
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleDoc {
    pub name: Option<String>,
    pub version: Option<String>,
    pub date: Option<String>,
    pub author: Author,
    pub methods: Vec<Method>,
}

impl fmt::Display for ModuleDoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NetLogo module \"{}\" version {}. Written by: {} on {}. ",
            self.name.as_deref().unwrap_or("unnamed"),
            self.version.as_deref().unwrap_or("unknown"),
            self.author,
            self.date.as_deref().unwrap_or("unknown date"),
        )?;
        if self.methods.is_empty() {
            write!(f, "Contains no methods")
        } else {
            writeln!(f, "\nContains {} methods:", self.methods.len())?;
            for method in &self.methods {
                writeln!(f, "{method}")?;
            }
            Ok(())
        }
    }
}
