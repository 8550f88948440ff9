/// Separator character, decoded as `0`.
pub const SEPARATOR: char = '_';
/// Letter that merges with its follower into a single value.
pub const COMBINING_LETTER: char = 'z';
/// Base added to the follower of a combining letter.
pub const COMBINING_BASE: u8 = 26;
/// Value of the last letter of the alphabet.
pub const MAX_LETTER_VALUE: u8 = 26;
/// Largest value the decoder can emit (`zz`).
pub const MAX_SYMBOL_VALUE: u8 = COMBINING_BASE + MAX_LETTER_VALUE;

/// Classified input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// The separator `_`.
    Separator,
    /// An ASCII letter with its 1-based alphabet position.
    Letter(u8),
    /// Anything else; carries the lower-cased character.
    Other(char),
}

impl Symbol {
    /// Value this symbol contributes when it follows a combining letter.
    pub fn combined_value(self) -> u8 {
        match self {
            Symbol::Separator | Symbol::Other(_) => COMBINING_BASE,
            Symbol::Letter(value) => COMBINING_BASE + value,
        }
    }
}

/// Classifies a single character, case-insensitively.
///
/// Only `_` is a separator; `-` classifies as [`Symbol::Other`].
pub fn classify(ch: char) -> Symbol {
    let ch = ch.to_ascii_lowercase();
    match ch {
        SEPARATOR => Symbol::Separator,
        'a'..='z' => Symbol::Letter(ch as u8 - b'a' + 1),
        other => Symbol::Other(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_letters_case_insensitive() {
        assert_eq!(classify('a'), Symbol::Letter(1));
        assert_eq!(classify('A'), Symbol::Letter(1));
        assert_eq!(classify('z'), Symbol::Letter(MAX_LETTER_VALUE));
        assert_eq!(classify('Q'), Symbol::Letter(17));
    }

    #[test]
    fn classify_separator_only_underscore() {
        assert_eq!(classify('_'), Symbol::Separator);
        assert_eq!(classify('-'), Symbol::Other('-'));
    }

    #[test]
    fn classify_rejects_non_ascii_letters() {
        assert_eq!(classify('é'), Symbol::Other('é'));
        assert_eq!(classify('7'), Symbol::Other('7'));
        assert_eq!(classify(' '), Symbol::Other(' '));
    }

    #[test]
    fn combined_values() {
        assert_eq!(Symbol::Separator.combined_value(), 26);
        assert_eq!(Symbol::Letter(1).combined_value(), 27);
        assert_eq!(Symbol::Letter(26).combined_value(), MAX_SYMBOL_VALUE);
        assert_eq!(Symbol::Other('1').combined_value(), 26);
    }
}
