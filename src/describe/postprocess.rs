//! Text passes run over the walker's output.
//!
//! Both passes are plain string rewrites. Input that does not have the
//! expected shape comes back unchanged.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::effects::PRIMARY_SCHOOLS;
use crate::glyphs::{CHROMATIC_TARGET, ELEMENTAL, SPIRIT};

/// Stand-in for "any primary school" while sections are compared.
const PLACEHOLDER: &str = "<:chromatic:0>";

/// Collapse runs of identical consecutive lines into `line xN`.
///
/// Blank lines are never folded and break a run.
///
/// ```
/// use spellscribe::describe::fold_duplicate_lines;
///
/// assert_eq!(fold_duplicate_lines("A\nA\nA\nB"), "A x3\nB");
/// assert_eq!(fold_duplicate_lines("A\n\nA"), "A\n\nA");
/// ```
#[must_use]
pub fn fold_duplicate_lines(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut lines = text.split('\n').peekable();

    while let Some(line) = lines.next() {
        let mut count = 1;
        if !line.trim().is_empty() {
            while lines.peek() == Some(&line) {
                lines.next();
                count += 1;
            }
        }

        if count > 1 {
            out.push(format!("{line} x{count}"));
        } else {
            out.push(line.to_string());
        }
    }

    out.join("\n")
}

/// Replace every primary school glyph with the placeholder.
fn normalize(section: &str) -> String {
    PRIMARY_SCHOOLS
        .iter()
        .fold(section.to_string(), |acc, school| acc.replace(school.glyph(), PLACEHOLDER))
}

/// Collapse sections that repeat once per primary school.
///
/// Sections are separated by blank lines. Sections that become identical
/// once their school glyphs are normalized, and that occur at least
/// `threshold` times, are replaced by their first occurrence written with
/// chromatic glyphs. Rarer sections are kept untouched.
#[must_use]
pub fn condense_sections(text: &str, threshold: usize) -> String {
    let sections: Vec<&str> = text.split("\n\n").collect();
    let keys: Vec<String> = sections.iter().map(|section| normalize(section)).collect();

    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for key in &keys {
        if key.contains(PLACEHOLDER) {
            *counts.entry(key.as_str()).or_default() += 1;
        }
    }

    let condensed: Vec<&str> = counts
        .iter()
        .filter(|&(_, &count)| count >= threshold)
        .map(|(&key, _)| key)
        .collect();
    if condensed.is_empty() {
        return text.to_string();
    }

    let mut emitted: Vec<&str> = Vec::new();
    let mut kept: Vec<String> = Vec::with_capacity(sections.len());
    for (section, key) in sections.iter().zip(&keys) {
        if !condensed.contains(&key.as_str()) {
            kept.push((*section).to_string());
            continue;
        }
        if emitted.contains(&key.as_str()) {
            continue;
        }
        debug!(count = counts[key.as_str()], "condensing per-school sections");
        emitted.push(key);
        kept.push(chromatic(key));
    }

    let mut text = kept.join("\n\n").replace(" Caster", "").replace(" Target", "");
    while text.contains("\n\n\n") {
        text = text.replace("\n\n\n", "\n\n");
    }
    text
}

/// Write a normalized section with display glyphs.
fn chromatic(key: &str) -> String {
    let spirit = format!("{ELEMENTAL}{SPIRIT}");
    key.replace(&format!("Target {PLACEHOLDER}"), &format!("Target {spirit}"))
        .replace(&format!("Caster {PLACEHOLDER}"), &format!("Caster {spirit}"))
        .replace(PLACEHOLDER, CHROMATIC_TARGET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyphs::{DAMAGE, FIRE, ICE};

    fn per_school(count: usize) -> String {
        PRIMARY_SCHOOLS
            .iter()
            .take(count)
            .map(|school| format!("Target {}:\n100 {}{DAMAGE}", school.glyph(), school.glyph()))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    #[test]
    fn test_fold_runs() {
        assert_eq!(fold_duplicate_lines("A\nA\nA\nB"), "A x3\nB");
        assert_eq!(fold_duplicate_lines("A\nB\nA"), "A\nB\nA");
        assert_eq!(fold_duplicate_lines("A\nA\n"), "A x2\n");
    }

    #[test]
    fn test_fold_skips_blank_lines() {
        assert_eq!(fold_duplicate_lines("A\n\nA"), "A\n\nA");
        assert_eq!(fold_duplicate_lines("A\n\n\nB"), "A\n\n\nB");
    }

    #[test]
    fn test_condense_six() {
        let out = condense_sections(&per_school(6), 6);
        assert_eq!(out, format!("Target {ELEMENTAL}{SPIRIT}:\n100 {CHROMATIC_TARGET}{DAMAGE}"));
        assert!(!out.contains(FIRE));
    }

    #[test]
    fn test_five_left_alone() {
        let text = per_school(5);
        assert_eq!(condense_sections(&text, 6), text);
    }

    #[test]
    fn test_other_sections_survive() {
        let text = format!("Random:\n50 {FIRE}{DAMAGE}\n\n{}\n\nLast {ICE}", per_school(6));
        let out = condense_sections(&text, 6);
        assert!(out.starts_with(&format!("Random:\n50 {FIRE}{DAMAGE}\n\n")));
        assert!(out.ends_with(&format!("\n\nLast {ICE}")));
        assert_eq!(out.matches(CHROMATIC_TARGET).count(), 1);
    }
}
