//! Text macros embedded in hook command templates
//!
//! `{{roll:XdY+Z}}` rolls dice and `{{random:min:max}}` draws a uniform
//! integer. Keywords are case-insensitive and whitespace inside the
//! braces is tolerated. Unparseable dice notation expands to 0 so a
//! template typo degrades instead of blocking gameplay.

use once_cell::sync::Lazy;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use regex::{Captures, Regex};

static DICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(\d+)\s*d\s*(\d+)\s*([+-]\s*\d+)?$").expect("valid regex"));

static ROLL_MACRO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\{\{\s*roll\s*:\s*([^}]*?)\s*\}\}").expect("valid regex"));

static RANDOM_MACRO_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\{\{\s*random\s*:\s*(\d+)\s*:\s*(\d+)\s*\}\}").expect("valid regex")
});

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{[^}]*\}\}").expect("valid regex"));

/// Roll dice notation like "2d6+3".
///
/// Returns 0 for anything unparseable and for zero dice or zero sides;
/// the modifier is signed, so valid totals may still be negative.
pub fn roll_dice(notation: &str, rng: &mut ChaCha8Rng) -> i64 {
    let Some(caps) = DICE_RE.captures(notation.trim()) else {
        return 0;
    };
    let num_dice: i64 = caps[1].parse().unwrap_or(0);
    let sides: i64 = caps[2].parse().unwrap_or(0);
    if num_dice <= 0 || sides <= 0 {
        return 0;
    }
    let modifier: i64 = caps
        .get(3)
        .map(|m| {
            m.as_str()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .parse()
                .unwrap_or(0)
        })
        .unwrap_or(0);

    let mut total = modifier;
    for _ in 0..num_dice {
        total += rng.gen_range(1..=sides);
    }
    total
}

/// Expand every roll and random macro in `text`.
///
/// Substitution has already run by the time this is called, so a macro
/// argument built from a variable is concrete. Each occurrence draws its
/// own randomness.
pub fn expand_macros(text: &str, rng: &mut ChaCha8Rng) -> String {
    let rolled = ROLL_MACRO_RE.replace_all(text, |caps: &Captures| {
        roll_dice(&caps[1], rng).to_string()
    });
    let expanded = RANDOM_MACRO_RE.replace_all(&rolled, |caps: &Captures| {
        let min: i64 = caps[1].parse().unwrap_or(0);
        let max: i64 = caps[2].parse().unwrap_or(0);
        if max < min {
            // Degenerate range collapses instead of panicking.
            min.to_string()
        } else {
            rng.gen_range(min..=max).to_string()
        }
    });
    expanded.into_owned()
}

/// `{{...}}` tokens left in `text` that are not valid macros. After
/// expansion these can only be unsubstituted variables.
pub fn unresolved_tokens(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|token| !ROLL_MACRO_RE.is_match(token) && !RANDOM_MACRO_RE.is_match(token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_roll_stays_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        for _ in 0..200 {
            let total = roll_dice("3d6+2", &mut rng);
            assert!((5..=20).contains(&total));
        }
    }

    #[test]
    fn test_negative_modifier_applies() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        for _ in 0..50 {
            let total = roll_dice("1d4-2", &mut rng);
            assert!((-1..=2).contains(&total));
        }
    }

    #[test]
    fn test_degenerate_notation_rolls_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        assert_eq!(roll_dice("0d6", &mut rng), 0);
        assert_eq!(roll_dice("2d0", &mut rng), 0);
        assert_eq!(roll_dice("abc", &mut rng), 0);
        assert_eq!(roll_dice("", &mut rng), 0);
        assert_eq!(roll_dice("2d6+", &mut rng), 0);
        assert_eq!(roll_dice("-1d6", &mut rng), 0);
    }

    #[test]
    fn test_notation_tolerates_case_and_whitespace() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        assert_eq!(roll_dice(" 1D1 ", &mut rng), 1);
        assert_eq!(roll_dice("2 d 1 + 3", &mut rng), 5);
    }

    #[test]
    fn test_expand_replaces_each_occurrence_independently() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let out = expand_macros("{{roll:1d1}} and {{roll:1d1+1}}", &mut rng);
        assert_eq!(out, "1 and 2");
    }

    #[test]
    fn test_random_macro_range_inclusive() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..300 {
            let out = expand_macros("{{random:2:4}}", &mut rng);
            let value: i64 = out.parse().unwrap();
            assert!((2..=4).contains(&value));
            seen_min |= value == 2;
            seen_max |= value == 4;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn test_random_macro_degenerate_range_collapses() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        assert_eq!(expand_macros("{{random:9:3}}", &mut rng), "9");
        assert_eq!(expand_macros("{{random:5:5}}", &mut rng), "5");
    }

    #[test]
    fn test_macro_keywords_case_insensitive() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        assert_eq!(expand_macros("{{ROLL:1d1}}", &mut rng), "1");
        assert_eq!(expand_macros("{{Random:7:7}}", &mut rng), "7");
    }

    #[test]
    fn test_unresolved_tokens_skip_valid_macros() {
        let tokens = unresolved_tokens("/cmd {{target}} {{roll:2d6}} {{random:1:3}} {{hp}}");
        assert_eq!(tokens, vec!["{{target}}", "{{hp}}"]);
    }
}
