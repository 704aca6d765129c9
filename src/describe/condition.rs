//! Condition header rewriting.
//!
//! Conditional and conversion nodes carry free text such as
//! `Target has Blade` or `not Target School Fire and not Target School Ice`.
//! The rewriter turns school names and status words into glyphs and drops
//! the filler words, in this order:
//!
//! 1. school exclusion chains collapse into one chromatic glyph
//! 2. ` School <name>` becomes ` <school glyph>`
//! 3. status words become glyphs
//! 4. ` Caster`, ` Target`, ` on` and ` has` are removed
//!
//! Step 4 has to come last; the chain patterns match on `Target`/`Caster`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::effects::{School, PRIMARY_SCHOOLS};
use crate::glyphs::*;

/// `not Target School A and not Target School B ...`, two to six schools.
static TARGET_CHAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"not Target School \w+(?: and not Target School \w+){1,5}").expect("valid pattern")
});

static CASTER_CHAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"not Caster School \w+(?: and not Caster School \w+){1,5}").expect("valid pattern")
});

static STATUS_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(NegativeAura|Weakness|Shield|Blade|Trap|Charm|Ward|Aura|DOT|HOT|OT)\b")
        .expect("valid pattern")
});

static FILLER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s(?:Caster|Target|on|has)\b").expect("valid pattern"));

/// Rewrite one condition text for display.
///
/// `use_blade_trap` keeps blades and traps as their own glyphs and also
/// rewrites Balance; conversion headers use it. Plain conditional headers
/// fold Blade into the charm glyph and Trap into the jinx glyph.
///
/// ```
/// use spellscribe::describe::rewrite_condition;
/// use spellscribe::glyphs;
///
/// let text = rewrite_condition("Target has Blade", true);
/// assert_eq!(text, format!("Target {}", glyphs::BLADE));
/// ```
#[must_use]
pub fn rewrite_condition(condition: &str, use_blade_trap: bool) -> String {
    let text = TARGET_CHAIN.replace_all(condition, CHROMATIC_TARGET);
    let mut text = CASTER_CHAIN.replace_all(&text, CHROMATIC_CASTER).into_owned();

    let balance = use_blade_trap.then_some(School::Balance);
    for school in PRIMARY_SCHOOLS.into_iter().chain(balance) {
        text = text.replace(&format!(" School {}", school.name()), &format!(" {}", school.glyph()));
    }

    let text = STATUS_WORD.replace_all(&text, |caps: &Captures<'_>| status_glyph(&caps[1], use_blade_trap));
    FILLER.replace_all(&text, "").into_owned()
}

fn status_glyph(word: &str, use_blade_trap: bool) -> String {
    let glyph = match word {
        "Blade" if use_blade_trap => BLADE,
        "Blade" => CHARM,
        "Trap" if use_blade_trap => TRAP,
        "Trap" => JINX,
        "Shield" => SHIELD,
        "Weakness" => WEAKNESS,
        "Charm" => CHARM,
        "Ward" => WARD,
        "Aura" => AURA,
        "NegativeAura" => AURA_NEGATIVE,
        "DOT" => DOT,
        "HOT" => HOT,
        "OT" => return format!("{DOT}{HOT}"),
        other => return other.to_string(),
    };
    glyph.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_modes() {
        assert_eq!(rewrite_condition("Target has Blade", false), format!("Target {CHARM}"));
        assert_eq!(rewrite_condition("Target has Blade", true), format!("Target {BLADE}"));
        assert_eq!(rewrite_condition("Caster has Trap", false), format!("Caster {JINX}"));
        assert_eq!(rewrite_condition("Caster has Trap", true), format!("Caster {TRAP}"));
    }

    #[test]
    fn test_over_time_words() {
        assert_eq!(rewrite_condition("Target has OT", false), format!("Target {DOT}{HOT}"));
        assert_eq!(rewrite_condition("Target has DOT", false), format!("Target {DOT}"));
    }

    #[test]
    fn test_school_words() {
        assert_eq!(rewrite_condition("Target School Fire", false), format!("Target {FIRE}"));
        assert_eq!(rewrite_condition("Caster School Balance", false), "Caster School Balance");
        assert_eq!(rewrite_condition("Caster School Balance", true), format!("Caster {BALANCE}"));
    }

    #[test]
    fn test_exclusion_chains() {
        let five = "not Target School Fire and not Target School Ice and not Target School Storm \
                    and not Target School Myth and not Target School Life";
        assert_eq!(rewrite_condition(five, false), CHROMATIC_TARGET);

        let two = "not Caster School Life and not Caster School Death";
        assert_eq!(rewrite_condition(two, false), CHROMATIC_CASTER);
    }

    #[test]
    fn test_single_exclusion_is_not_a_chain() {
        let text = rewrite_condition("not Target School Fire", false);
        assert_eq!(text, format!("not {FIRE}"));
    }

    #[test]
    fn test_filler_words_need_boundaries() {
        let text = rewrite_condition("Target has 3 Ward on Caster", false);
        assert_eq!(text, format!("Target 3 {WARD}"));
        assert_eq!(rewrite_condition("Target honors", false), "Target honors");
    }
}
