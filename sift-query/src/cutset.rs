use std::fmt;

use unicode_general_category::{get_general_category, GeneralCategory};

/// Decides which characters are stripped from filter values and raw text.
pub trait Cutset: Send + Sync {
    /// Returns true when `ch` must be removed.
    fn cut(&self, ch: char) -> bool;
}

impl<F> Cutset for F
where
    F: Fn(char) -> bool + Send + Sync,
{
    fn cut(&self, ch: char) -> bool {
        self(ch)
    }
}

/// Keeps letters, digits, space, tab and `_ , - . :`; strips everything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultCut;

impl Cutset for DefaultCut {
    fn cut(&self, ch: char) -> bool {
        default_cut(ch)
    }
}

impl fmt::Display for DefaultCut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("default")
    }
}

pub fn default_cut(ch: char) -> bool {
    !(is_letter(ch)
        || is_number(ch)
        || matches!(ch, ' ' | '\t' | '_' | ',' | '-' | '.' | ':'))
}

/// General category L*. Narrower than `char::is_alphabetic`, which also takes
/// Other_Alphabetic marks and symbols such as `Ⓐ`.
fn is_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// General category N*.
fn is_number(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

/// Remove every char `cut` selects, keeping the order of the rest.
pub fn apply(input: &str, cut: &dyn Cutset) -> String {
    input.chars().filter(|&c| !cut.cut(c)).collect()
}

/// Collapse every run of two or more spaces into one.
pub fn collapse_spaces(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_space = false;
    for c in input.chars() {
        if c == ' ' && prev_space {
            continue;
        }
        prev_space = c == ' ';
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cut_keeps_allowed_set() {
        assert_eq!(apply("te$st#! a_b,c-d.e:f\tg", &DefaultCut), "test a_b,c-d.e:f\tg");
        assert_eq!(apply("\"quoted\" 'single'", &DefaultCut), "quoted single");
        assert_eq!(apply("größe ٣", &DefaultCut), "größe ٣");
    }

    #[test]
    fn default_cut_strips_non_letter_alphabetics() {
        // So symbol, Mc and Mn combining marks
        assert!(DefaultCut.cut('Ⓐ'));
        assert!(DefaultCut.cut('\u{093F}'));
        assert!(DefaultCut.cut('\u{0345}'));
        assert_eq!(apply("Ⓐb\u{0915}\u{093F}", &DefaultCut), "b\u{0915}");
        // Nl and No numbers stay
        assert!(!DefaultCut.cut('Ⅻ'));
        assert!(!DefaultCut.cut('½'));
    }

    #[test]
    fn apply_is_idempotent() {
        let once = apply("a@b  c!!d \"e\"", &DefaultCut);
        assert_eq!(apply(&once, &DefaultCut), once);
    }

    #[test]
    fn closures_are_cutsets() {
        let no_digits = |c: char| c.is_ascii_digit();
        assert_eq!(apply("a1b2c3", &no_digits), "abc");
    }

    #[test]
    fn collapse_spaces_leaves_tabs() {
        assert_eq!(collapse_spaces("a    b  c"), "a b c");
        assert_eq!(collapse_spaces("a \t b"), "a \t b");
        assert_eq!(collapse_spaces(""), "");
    }
}
