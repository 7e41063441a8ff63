//! Optimization pass — ordered deterministic rewrites driven by the
//! review verdict. Rules that find nothing are no-ops; rules that cannot
//! apply safely are skipped, never aborted.

pub mod rules;

use tracing::debug;

use atelier_core::config::POINTS_PER_OPTIMIZATION;
use atelier_core::model::{OptimizationRecord, Priority, ReviewVerdict};

/// Apply the fixed rewrite sequence, then the verdict-carried line fixes,
/// then rewrites mapped from High-priority suggestions.
///
/// Every stage appends a label only when it actually changed the text, so
/// a second pass over an already-optimized artifact (with a fresh verdict
/// for it) applies nothing and returns an empty ledger.
///
/// The returned score delta is advisory; callers re-review the artifact
/// for a ground-truth score.
pub fn optimize(
    artifact: &str,
    verdict: &ReviewVerdict,
    category: &str,
) -> (String, OptimizationRecord) {
    let category = category.to_lowercase();
    let mut current = artifact.to_string();
    let mut record = OptimizationRecord::default();

    // Stage 1: category-conditioned rewrite rules, fixed order.
    for rule in rules::all() {
        if let Some(rewritten) = (rule.apply)(&current, &category) {
            if rewritten != current {
                current = rewritten;
                record.record(rule.label);
            }
        }
    }

    // Stage 2: verdict-carried line fixes, re-anchored onto the current
    // text since stage 1 may have touched the same lines.
    current = apply_issue_fixes(artifact, &current, verdict, &mut record);

    // Stage 3: High-priority suggestions that map onto a known rewrite.
    for suggestion in verdict
        .suggestions
        .iter()
        .filter(|s| s.priority == Priority::High)
    {
        if let Some(rule) = rules::for_suggestion(&suggestion.message) {
            if let Some(rewritten) = (rule.apply)(&current, &category) {
                if rewritten != current {
                    current = rewritten;
                    record.record(rule.label);
                }
            }
        }
    }

    let cap = u32::from(100u8.saturating_sub(verdict.score));
    let earned = (record.applied.len() as u32 * u32::from(POINTS_PER_OPTIMIZATION)).min(cap);
    record.score_delta = earned as u8;
    record.artifact = current.clone();

    debug!(
        applied = record.applied.len(),
        score_delta = record.score_delta,
        "optimization pass finished"
    );
    (current, record)
}

/// Replay each non-empty issue fix against the current text. The fix was
/// derived from `reviewed`, the artifact the verdict scored; if stage 1
/// already rewrote the target line, the edit is re-anchored, and skipped
/// when its anchor is gone.
fn apply_issue_fixes(
    reviewed: &str,
    current: &str,
    verdict: &ReviewVerdict,
    record: &mut OptimizationRecord,
) -> String {
    let reviewed_lines: Vec<&str> = reviewed.lines().collect();

    // Split preserving each line's own ending, so an untouched artifact is
    // reassembled byte-identical (CRLF included).
    let mut lines: Vec<String> = Vec::new();
    let mut endings: Vec<&str> = Vec::new();
    for piece in current.split_inclusive('\n') {
        let (line, ending) = match piece.strip_suffix("\r\n") {
            Some(body) => (body, "\r\n"),
            None => match piece.strip_suffix('\n') {
                Some(body) => (body, "\n"),
                None => (piece, ""),
            },
        };
        lines.push(line.to_string());
        endings.push(ending);
    }

    let mut changed = false;
    for issue in &verdict.issues {
        let Some(fix) = issue.fix.as_deref().filter(|f| !f.is_empty()) else {
            continue;
        };
        let Some(line_no) = issue.line else { continue };
        let index = line_no as usize;
        if index == 0 || index > lines.len() || index > reviewed_lines.len() {
            continue;
        }

        let original = reviewed_lines[index - 1];
        if let Some(updated) = reapply_edit(original, fix, &lines[index - 1]) {
            lines[index - 1] = updated;
            changed = true;
            record.record(format!("Applied fix: {}", issue.message));
        }
    }

    if !changed {
        return current.to_string();
    }

    let mut out = String::with_capacity(current.len() + 32);
    for (line, ending) in lines.iter().zip(&endings) {
        out.push_str(line);
        out.push_str(ending);
    }
    out
}

/// Replay the edit `original -> fix` onto `current`, which may already
/// differ from `original`. Returns the updated line, or `None` when the
/// fix is already in place or its anchor span is gone (ambiguous: skip).
fn reapply_edit(original: &str, fix: &str, current: &str) -> Option<String> {
    if current == fix {
        return None;
    }
    if current == original {
        return Some(fix.to_string());
    }

    // Narrow the edit to the span `original` -> `fix` actually changed.
    let prefix = common_prefix(original, fix);
    let suffix = common_suffix(&original[prefix..], &fix[prefix..]);
    let removed = &original[prefix..original.len() - suffix];
    let inserted = &fix[prefix..fix.len() - suffix];

    let anchor = &original[..prefix];
    if !current.starts_with(anchor) {
        return None;
    }
    let tail = &current[prefix..];
    if !tail.starts_with(removed) {
        return None;
    }

    let mut out = String::with_capacity(current.len() + inserted.len());
    out.push_str(anchor);
    out.push_str(inserted);
    out.push_str(&tail[removed.len()..]);
    Some(out)
}

fn common_prefix(a: &str, b: &str) -> usize {
    let mut len = a
        .as_bytes()
        .iter()
        .zip(b.as_bytes())
        .take_while(|(x, y)| x == y)
        .count();
    while len > 0 && (!a.is_char_boundary(len) || !b.is_char_boundary(len)) {
        len -= 1;
    }
    len
}

fn common_suffix(a: &str, b: &str) -> usize {
    let mut len = a
        .as_bytes()
        .iter()
        .rev()
        .zip(b.as_bytes().iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    while len > 0
        && (!a.is_char_boundary(a.len() - len) || !b.is_char_boundary(b.len() - len))
    {
        len -= 1;
    }
    len
}
