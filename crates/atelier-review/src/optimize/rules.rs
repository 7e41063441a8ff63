//! Rewrite rule table — ordered, category-conditioned, skip-on-no-match.
//! Every rule rewrites within lines and never adds or removes lines, so
//! verdict line numbers stay valid across the whole pass.

use crate::analyzers::types::{ANY_ANNOTATION, ANY_CAST};

/// One deterministic rewrite. `apply` returns the rewritten artifact, or
/// `None` when nothing matched.
pub struct RewriteRule {
    pub label: &'static str,
    pub apply: fn(&str, &str) -> Option<String>,
}

const RULES: &[RewriteRule] = &[
    RewriteRule {
        label: "Added lazy loading to media tags",
        apply: lazy_media,
    },
    RewriteRule {
        label: "Replaced unchecked any annotations with unknown",
        apply: safer_any,
    },
    RewriteRule {
        label: "Inserted stable keys into list rendering",
        apply: list_keys,
    },
    RewriteRule {
        label: "Hardened external links with rel=\"noopener noreferrer\"",
        apply: safe_blank_targets,
    },
];

/// The fixed rule sequence, in application order.
pub fn all() -> &'static [RewriteRule] {
    RULES
}

/// High-priority suggestion messages that map onto one of the rules.
/// Unknown suggestions are no-ops.
pub fn for_suggestion(message: &str) -> Option<&'static RewriteRule> {
    let lower = message.to_lowercase();
    if lower.contains("`any`") {
        return RULES.iter().find(|r| r.label.contains("any annotations"));
    }
    if lower.contains("loading=\"lazy\"") {
        return RULES.iter().find(|r| r.label.contains("lazy loading"));
    }
    None
}

/// Add `loading="lazy"` to media tags that lack a loading attribute.
/// Keyed on tag presence; the media-ish category is the common case but
/// any artifact carrying an `<img` benefits identically.
fn lazy_media(artifact: &str, _category: &str) -> Option<String> {
    if !artifact.contains("<img") {
        return None;
    }
    rewrite_lines(artifact, |line| {
        if line.contains("<img") && !line.contains("loading=") {
            Some(line.replacen("<img", "<img loading=\"lazy\"", 1))
        } else {
            None
        }
    })
}

/// Replace unchecked dynamic-type annotations and casts with `unknown`.
fn safer_any(artifact: &str, _category: &str) -> Option<String> {
    let mut rewritten = ANY_ANNOTATION.replace_all(artifact, ": unknown").into_owned();
    rewritten = ANY_CAST.replace_all(&rewritten, "as unknown").into_owned();
    (rewritten != artifact).then_some(rewritten)
}

/// Insert a stable `key` into single-line `.map(` renders whose element
/// start is unambiguous. Destructured or multi-line renders are skipped.
fn list_keys(artifact: &str, _category: &str) -> Option<String> {
    if !artifact.contains(".map(") {
        return None;
    }
    rewrite_lines(artifact, insert_key_in_line)
}

fn insert_key_in_line(line: &str) -> Option<String> {
    let map_pos = line.find(".map(")?;
    let rest = &line[map_pos + ".map(".len()..];

    // Parameter name: `.map(item =>` or `.map((item, index) =>`.
    let param: String = rest
        .trim_start_matches('(')
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if param.is_empty() {
        return None;
    }

    let arrow = rest.find("=>")?;
    let after_arrow = &rest[arrow + 2..];
    let element = after_arrow.find('<')?;
    // Between the arrow and the element only whitespace and an optional
    // opening paren; anything else is a block body we do not rewrite.
    if !after_arrow[..element]
        .trim()
        .trim_matches('(')
        .is_empty()
    {
        return None;
    }

    let tag_start = map_pos + ".map(".len() + arrow + 2 + element + 1;
    let tag: String = line[tag_start..]
        .chars()
        .take_while(|c| c.is_alphanumeric())
        .collect();
    if tag.is_empty() {
        return None;
    }

    let close = tag_start + line[tag_start..].find('>')?;
    if line[tag_start..close].contains("key=") {
        return None;
    }

    let mut out = line.to_string();
    out.insert_str(tag_start + tag.len(), &format!(" key={{{param}.id}}"));
    Some(out)
}

/// Add `rel="noopener noreferrer"` to `target="_blank"` anchors lacking
/// any rel attribute.
fn safe_blank_targets(artifact: &str, _category: &str) -> Option<String> {
    rewrite_lines(artifact, |line| {
        if line.contains("target=\"_blank\"") && !line.contains("rel=") {
            Some(line.replacen(
                "target=\"_blank\"",
                "target=\"_blank\" rel=\"noopener noreferrer\"",
                1,
            ))
        } else {
            None
        }
    })
}

/// Apply a per-line rewrite across the artifact, preserving original line
/// endings. Returns `None` when no line changed.
fn rewrite_lines(artifact: &str, rewrite: impl Fn(&str) -> Option<String>) -> Option<String> {
    let mut changed = false;
    let mut out = String::with_capacity(artifact.len() + 32);

    for piece in artifact.split_inclusive('\n') {
        let (line, ending) = match piece.strip_suffix("\r\n") {
            Some(body) => (body, "\r\n"),
            None => match piece.strip_suffix('\n') {
                Some(body) => (body, "\n"),
                None => (piece, ""),
            },
        };
        match rewrite(line) {
            Some(updated) => {
                changed = true;
                out.push_str(&updated);
            }
            None => out.push_str(line),
        }
        out.push_str(ending);
    }

    changed.then_some(out)
}
