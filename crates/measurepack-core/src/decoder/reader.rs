use std::str::Chars;

use super::alphabet::{Symbol, classify};

/// Forward-only cursor over the characters of an encoded string.
pub struct SymbolReader<'a> {
    rest: Chars<'a>,
    position: usize,
}

impl<'a> SymbolReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            rest: input.chars(),
            position: 0,
        }
    }

    /// Character index of the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn peek(&self) -> Option<char> {
        self.rest.clone().next()
    }

    pub fn peek_next(&self) -> Option<char> {
        self.rest.clone().nth(1)
    }

    pub fn peek_symbol(&self) -> Option<Symbol> {
        self.peek().map(classify)
    }

    pub fn peek_next_symbol(&self) -> Option<Symbol> {
        self.peek_next().map(classify)
    }

    /// Moves the cursor forward by up to `count` characters.
    pub fn advance(&mut self, count: usize) {
        for _ in 0..count {
            if self.rest.next().is_none() {
                break;
            }
            self.position += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SymbolReader;
    use crate::decoder::alphabet::Symbol;

    #[test]
    fn peeks_without_consuming() {
        let reader = SymbolReader::new("aZ");
        assert_eq!(reader.peek(), Some('a'));
        assert_eq!(reader.peek_next(), Some('Z'));
        assert_eq!(reader.peek_next_symbol(), Some(Symbol::Letter(26)));
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn advance_stops_at_end() {
        let mut reader = SymbolReader::new("ab");
        reader.advance(5);
        assert_eq!(reader.position(), 2);
        assert_eq!(reader.peek(), None);
        assert_eq!(reader.peek_next(), None);
    }

    #[test]
    fn positions_count_characters_not_bytes() {
        let mut reader = SymbolReader::new("éa");
        reader.advance(1);
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.peek_symbol(), Some(Symbol::Letter(1)));
    }
}
