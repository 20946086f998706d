//! ES module import extraction.
//!
//! Three declaration forms are scanned independently:
//!
//! - named: `import { a, b as c } from "./m"` binds `a` and `c`
//! - default: `import d from "./m"`
//! - namespace: `import * as ns from "./m"`
//!
//! The combined forms `import d, { a } from` and `import d, * as ns from`
//! bind both names. Only bindings whose module passes
//! [`is_source_module`] are kept. Declarations that sit inside a string or
//! comment are skipped.

pub mod classifier;

pub use classifier::is_source_module;

use crate::core::ImportedSymbol;
use crate::lexical::{next_char_boundary, LexicalScanner};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const IDENT: &str = r"[\p{ID_Start}_$][\p{ID_Continue}$]*";
const SPECIFIER: &str = r#"['"]([^'"\n]+)['"]"#;

static NAMED_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\bimport\s+(?:type\s+)?(?:{IDENT}\s*,\s*)?\{{([^}}]*)\}}\s*from\s*{SPECIFIER}"
    ))
    .expect("named import pattern is valid")
});

static DEFAULT_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\bimport\s+(?:type\s+)?({IDENT})(?:\s*,\s*(?:\{{[^}}]*\}}|\*\s*as\s+{IDENT}))?\s+from\s*{SPECIFIER}"
    ))
    .expect("default import pattern is valid")
});

static NAMESPACE_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\bimport\s+(?:type\s+)?(?:{IDENT}\s*,\s*)?\*\s*as\s+({IDENT})\s+from\s*{SPECIFIER}"
    ))
    .expect("namespace import pattern is valid")
});

static BINDING_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"//[^\n]*|/\*[\s\S]*?\*/").expect("comment pattern is valid"));

static BINDING_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{IDENT}$")).expect("identifier pattern is valid"));

/// Collect every production-source binding imported by `text`, in source
/// order. Repeated imports of the same module each contribute.
pub fn extract_imports(text: &str) -> Vec<ImportedSymbol> {
    let mut found: Vec<(usize, ImportedSymbol)> = Vec::new();

    collect_matches(text, &DEFAULT_IMPORT, &mut found, |caps| {
        caps.get(1)
            .map(|name| vec![name.as_str().to_string()])
            .unwrap_or_default()
    });
    collect_matches(text, &NAMED_IMPORT, &mut found, |caps| {
        caps.get(1)
            .map(|bindings| parse_named_bindings(bindings.as_str()))
            .unwrap_or_default()
    });
    collect_matches(text, &NAMESPACE_IMPORT, &mut found, |caps| {
        caps.get(1)
            .map(|name| vec![name.as_str().to_string()])
            .unwrap_or_default()
    });

    found.sort_by_key(|(offset, _)| *offset);
    found.into_iter().map(|(_, symbol)| symbol).collect()
}

fn collect_matches<F>(
    text: &str,
    pattern: &Regex,
    found: &mut Vec<(usize, ImportedSymbol)>,
    bindings: F,
) where
    F: Fn(&Captures) -> Vec<String>,
{
    let mut scanner = LexicalScanner::new(text);
    let mut search_from = 0;

    while let Some(caps) = pattern.captures_at(text, search_from) {
        let (Some(whole), Some(module)) = (caps.get(0), caps.get(2)) else {
            break;
        };
        let start = whole.start();

        if scanner.is_non_code_at(start) {
            // the rejected match may run into a real import, so resume just past its start
            search_from = next_char_boundary(text, start);
            continue;
        }
        search_from = whole.end();

        let module_path = module.as_str();
        if !is_source_module(module_path) {
            continue;
        }
        for name in bindings(&caps) {
            found.push((start, ImportedSymbol::new(name, module_path)));
        }
    }
}

/// Binding names from the inside of `{ ... }`. `a as b` binds `b`; the
/// TypeScript `type` modifier is dropped.
fn parse_named_bindings(inner: &str) -> Vec<String> {
    let cleaned = BINDING_COMMENT.replace_all(inner, " ");

    cleaned
        .split(',')
        .filter_map(|entry| {
            let words: Vec<&str> = entry.split_whitespace().collect();
            let binding = match words.as_slice() {
                [name] | ["type", name] => *name,
                [_, "as", alias] | ["type", _, "as", alias] => *alias,
                _ => return None,
            };
            BINDING_NAME
                .is_match(binding)
                .then(|| binding.to_string())
        })
        .collect()
}
