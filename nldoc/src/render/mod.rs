//! Renders a populated [`ModuleDoc`] into the final HTML document.
//!
//! The two method fragments (overview table rows and per-procedure
//! description blocks) are built with `horrorshow` and substituted,
//! together with the module metadata and a generation timestamp, into a
//! page skeleton carrying `{{name}}` substitution points.

use crate::{
    doc::{Method, ModuleDoc},
    error::RenderError,
};
use chrono::Local;
use horrorshow::{box_html, html, prelude::*, Raw};
use regex::{Captures, Regex};
use std::collections::{BTreeMap, BTreeSet};

/// Substitution points the page skeleton must define.
pub(crate) const SKELETON_FIELDS: [&str; 8] = [
    "title",
    "author",
    "email",
    "version",
    "date",
    "generated",
    "method_overview",
    "method_descriptions",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug)]
pub(crate) struct HTMLString(pub(crate) String);

/// A [`ModuleDoc`] rendered to HTML.
#[derive(Debug)]
pub(crate) struct RenderedDocument {
    pub(crate) file_contents: HTMLString,
}

impl RenderedDocument {
    /// Renders `module` against `skeleton`, capturing the generation
    /// timestamp once per call.
    pub(crate) fn from_module(module: &ModuleDoc, skeleton: &str) -> Result<Self, RenderError> {
        let generated = Local::now().format(TIMESTAMP_FORMAT).to_string();
        Self::from_module_at(module, skeleton, &generated)
    }

    /// Renders with a caller-supplied timestamp; everything else is
    /// deterministic in the module content and skeleton.
    pub(crate) fn from_module_at(
        module: &ModuleDoc,
        skeleton: &str,
        generated: &str,
    ) -> Result<Self, RenderError> {
        let fields = BTreeMap::from([
            ("title", module.name.clone().unwrap_or_default()),
            ("author", module.author.name.clone().unwrap_or_default()),
            ("email", module.author.email.clone().unwrap_or_default()),
            ("version", module.version.clone().unwrap_or_default()),
            ("date", module.date.clone().unwrap_or_default()),
            ("generated", generated.to_string()),
            ("method_overview", method_overview(&module.methods)),
            ("method_descriptions", method_descriptions(&module.methods)),
        ]);
        let filled = substitute(skeleton, &fields)?;
        Ok(Self {
            file_contents: HTMLString(filled),
        })
    }
}

/// Renders a fragment builder to its HTML text.
fn fragment(content: Box<dyn RenderBox>) -> String {
    let markup = html! {
        : content
    };
    markup.into_string().unwrap()
}

/// One overview table row per method, in module order. Empty for a module
/// with no methods.
fn method_overview(methods: &[Method]) -> String {
    let mut rows = String::new();
    for method in methods {
        rows.push_str(&fragment(overview_row(method)));
    }
    rows
}

fn overview_row(method: &Method) -> Box<dyn RenderBox> {
    let name = method.name.clone();
    let href = format!("#method-{name}");
    let first_line = method.first_line().to_string();
    box_html! {
        tr {
            td(class="method") {
                a(href=href) { : name }
            }
            td { : first_line }
        }
    }
}

/// One anchored description block per method: heading, free-text comment,
/// optional return value, optional parameter table.
fn method_descriptions(methods: &[Method]) -> String {
    let mut blocks = String::new();
    for method in methods {
        blocks.push_str(&fragment(description_block(method)));
    }
    blocks
}

fn description_block(method: &Method) -> Box<dyn RenderBox> {
    let anchor = format!("method-{}", method.name);
    let name = method.name.clone();
    let description = Raw(htmlize_line_breaks(&method.description));
    let report = method.report.clone();
    let params = method.params.clone();
    box_html! {
        h2(class="method", id=anchor) { : name }
        p(class="indent") { : description }
        @ if report.is_some() {
            h3(class="indent") { : "Return value" }
            p(class="indent") { : report.clone().unwrap() }
        }
        @ if !params.is_empty() {
            h3(class="indent") { : "Method parameters:" }
            table(class="params") {
                tr {
                    th { : "Parameter" }
                    th { : "Contents" }
                }
                @ for param in params {
                    tr {
                        td(class="method") { : param.name }
                        td { : param.description }
                    }
                }
            }
        }
    }
}

/// Escapes each description line and joins them with explicit line breaks.
fn htmlize_line_breaks(text: &str) -> String {
    let mut out = String::new();
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push_str("<br/>");
        }
        let line = line.to_string();
        out.push_str(&fragment(box_html! { : line }));
    }
    out
}

/// Substitutes every `{{name}}` point in `skeleton` from `fields`. A point
/// without a field is an error, as is a field without a point; nothing is
/// partially filled.
fn substitute(
    skeleton: &str,
    fields: &BTreeMap<&'static str, String>,
) -> Result<String, RenderError> {
    let placeholder = Regex::new(r"\{\{([A-Za-z_]+)\}\}").unwrap();

    let mut seen = BTreeSet::new();
    for caps in placeholder.captures_iter(skeleton) {
        let point = caps.get(1).unwrap().as_str();
        if !fields.contains_key(point) {
            return Err(RenderError::UnknownPlaceholder(point.to_string()));
        }
        seen.insert(point.to_string());
    }
    for field in SKELETON_FIELDS {
        if !seen.contains(field) {
            return Err(RenderError::MissingPlaceholder(field));
        }
    }

    let filled = placeholder.replace_all(skeleton, |caps: &Captures| {
        fields[caps.get(1).unwrap().as_str()].clone()
    });
    Ok(filled.into_owned())
}
