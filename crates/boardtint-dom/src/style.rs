//! Inline-style declaration helpers
//!
//! Inline styles travel as plain `property: value;` declaration strings, the
//! form the host document exposes. These helpers parse, look up, and upsert
//! declarations without a CSS engine.

/// Parse a declaration string into `(property, value)` pairs
///
/// Empty segments are skipped; properties and values are trimmed.
#[must_use]
pub fn declarations(css: &str) -> Vec<(String, String)> {
    css.split(';')
        .filter_map(|segment| {
            let (property, value) = segment.split_once(':')?;
            let property = property.trim();
            let value = value.trim();
            if property.is_empty() || value.is_empty() {
                return None;
            }
            Some((property.to_string(), value.to_string()))
        })
        .collect()
}

/// Look up the value of one property
#[must_use]
pub fn value_of(css: &str, property: &str) -> Option<String> {
    declarations(css)
        .into_iter()
        .rev()
        .find(|(p, _)| p == property)
        .map(|(_, v)| v)
}

/// Whether the style declares `property: value`
#[must_use]
pub fn declares(css: &str, property: &str, value: &str) -> bool {
    value_of(css, property).is_some_and(|v| v == value)
}

/// Replace or append one declaration, preserving the others in order
#[must_use]
pub fn upsert_declaration(css: &str, property: &str, value: &str) -> String {
    let mut decls = declarations(css);
    match decls.iter_mut().find(|(p, _)| p == property) {
        Some(entry) => entry.1 = value.to_string(),
        None => decls.push((property.to_string(), value.to_string())),
    }
    render(&decls)
}

fn render(decls: &[(String, String)]) -> String {
    decls
        .iter()
        .map(|(p, v)| format!("{p}: {v};"))
        .collect::<Vec<_>>()
        .join(" ")
}
