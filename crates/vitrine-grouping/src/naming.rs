//! Name helpers shared by every clustering strategy: the family title, the
//! per-variant label, and the slug used as a family id.

use vitrine_core::{RawProduct, VariantAttributes};

use crate::rules::strip_trailing_variant_tokens;

/// Titles shorter than this (in characters) are too vague to display.
const MIN_COMMON_NAME_CHARS: usize = 8;

/// Title used when there is nothing at all to name a family after.
const FALLBACK_NAME: &str = "Produto";

/// Characters trimmed from both ends of a variant label.
fn is_label_edge(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '(' | ')')
}

/// Derives a family title from its members' names.
///
/// Keeps the words of the first name that occur, case-insensitively, in
/// every name. When that leaves fewer than eight characters the shortest
/// name (earliest on ties) is used instead, with trailing variant tokens
/// stripped. Never returns an empty string.
#[must_use]
pub fn common_product_name<S: AsRef<str>>(names: &[S]) -> String {
    let Some(first) = names.first().map(AsRef::as_ref) else {
        return FALLBACK_NAME.to_owned();
    };
    if names.len() == 1 {
        return non_empty_or_fallback(first.trim());
    }

    let lowered: Vec<String> = names.iter().map(|n| n.as_ref().to_lowercase()).collect();
    let shared = first
        .split_whitespace()
        .filter(|word| {
            let word = word.to_lowercase();
            lowered.iter().all(|name| name.contains(&word))
        })
        .collect::<Vec<_>>()
        .join(" ");

    if shared.chars().count() >= MIN_COMMON_NAME_CHARS {
        return shared;
    }

    let shortest = names
        .iter()
        .map(AsRef::as_ref)
        .min_by_key(|n| n.chars().count())
        .unwrap_or(first);
    let stripped = strip_trailing_variant_tokens(shortest);
    if stripped.is_empty() {
        non_empty_or_fallback(first.trim())
    } else {
        stripped
    }
}

fn non_empty_or_fallback(name: &str) -> String {
    if name.is_empty() {
        FALLBACK_NAME.to_owned()
    } else {
        name.to_owned()
    }
}

/// Builds a label from the structured variant fields: dimensions first, then
/// grain, then encaixe (skipped when it is a `Furo` bore). Every applicable
/// part is included, space-separated.
///
/// Returns `None` when none of those parts apply.
#[must_use]
pub fn attribute_label(attributes: &VariantAttributes) -> Option<String> {
    let mut parts = Vec::new();
    match (&attributes.diametro_ext, &attributes.altura_roda) {
        (Some(diameter), Some(height)) => parts.push(format!("{diameter}x{height}mm")),
        (Some(diameter), None) => parts.push(format!("⌀{diameter}mm")),
        _ => {}
    }
    if let Some(grain) = &attributes.grao {
        parts.push(format!("Grão {grain}"));
    }
    if let Some(encaixe) = attributes.encaixe.as_ref().filter(|e| !e.contains("Furo")) {
        parts.push(format!("Encaixe {encaixe}"));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Derives the label that tells `product` apart from its siblings.
///
/// The remainder of the name after removing `base` wins when it says
/// something; otherwise the label comes from the variant fields, then from
/// the SKU tail. Separator characters are trimmed last, so a remainder made
/// only of them ends up as `Variante <tail>`.
#[must_use]
pub fn variant_label(product: &RawProduct, base: &str) -> String {
    let tail = last_chars(product.identity(), 4);

    let from_name = (!base.is_empty())
        .then(|| product.name.replacen(base, "", 1))
        .map(|rest| rest.trim().to_owned())
        .filter(|rest| !rest.is_empty() && *rest != product.name);

    let label = from_name
        .or_else(|| attribute_label(&product.attributes))
        .unwrap_or_else(|| format!("SKU {tail}"));

    let label = label.trim_matches(is_label_edge);
    if label.is_empty() {
        format!("Variante {tail}")
    } else {
        label.to_owned()
    }
}

/// Lowercases, turns whitespace runs into `-`, and drops everything that is
/// not an ASCII letter, digit, or hyphen.
#[must_use]
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

/// The last `n` characters of `s` (all of it when shorter).
#[must_use]
pub(crate) fn last_chars(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if count <= n {
        return s;
    }
    let start = s
        .char_indices()
        .nth(count - n)
        .map_or(0, |(idx, _)| idx);
    &s[start..]
}

#[cfg(test)]
#[path = "naming_test.rs"]
mod tests;
