#![deny(warnings)]

use crate::cell::Cell;

/// Turns a character stream into cells. Whitespace is stripped before
/// anything else looks at it, so it never starts or splits an operand run.
pub struct Tokenizer<I: Iterator<Item = char>> {
    src: I,
    deferred: Option<Cell>,
}

impl<I: Iterator<Item = char>> Tokenizer<I> {
    pub fn new(source: I) -> Self {
        Tokenizer { src: source, deferred: None }
    }
}

impl<I: Iterator<Item = char>> Iterator for Tokenizer<I> {
    type Item = Cell;
    fn next(&mut self) -> Option<Self::Item> {
        if let Some(cell) = self.deferred.take() {
            return Some(cell);
        }
        let mut run = String::new();
        for c in self.src.by_ref() {
            if c.is_whitespace() {
                continue;
            }
            match Cell::structural(c) {
                Some(cell) if run.is_empty() => return Some(cell),
                // the pending operand run goes out first, the structural
                // cell waits for the next call
                Some(cell) => {
                    self.deferred = Some(cell);
                    return Some(Cell::operand(run));
                }
                None => run.push(c),
            }
        }
        if run.is_empty() {
            None
        } else {
            Some(Cell::operand(run))
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Cell, Tokenizer};

    #[test]
    fn basic_ops() {
        let mut lx = Tokenizer::new("3+4*2/(1-5)^2".chars());
        let expect = [
            Cell::Number(3.0),
            Cell::BinOp('+'),
            Cell::Number(4.0),
            Cell::BinOp('*'),
            Cell::Number(2.0),
            Cell::BinOp('/'),
            Cell::OParen,
            Cell::Number(1.0),
            Cell::BinOp('-'),
            Cell::Number(5.0),
            Cell::CParen,
            Cell::BinOp('^'),
            Cell::Number(2.0),
        ];
        for exp_cell in expect.iter() {
            assert_eq!(*exp_cell, lx.next().unwrap());
        }
        assert_eq!(lx.next(), None);
    }

    #[test]
    fn multichar_operands() {
        let mut lx = Tokenizer::new("10.5/250+3e2".chars());
        let expect = [
            Cell::Number(10.5),
            Cell::BinOp('/'),
            Cell::Number(250.0),
            Cell::BinOp('+'),
            Cell::Number(300.0),
        ];
        for exp_cell in expect.iter() {
            assert_eq!(*exp_cell, lx.next().unwrap());
        }
        assert_eq!(lx.next(), None);
    }

    #[test]
    fn whitespace_is_stripped() {
        let spaced: Vec<Cell> = Tokenizer::new(" 2 +\t3 * 4 ".chars()).collect();
        let tight: Vec<Cell> = Tokenizer::new("2+3*4".chars()).collect();
        assert_eq!(spaced, tight);
        // stripping happens before runs form, interior spaces join digits
        let mut lx = Tokenizer::new("1 2".chars());
        assert_eq!(lx.next(), Some(Cell::Number(12.0)));
        assert_eq!(lx.next(), None);
    }

    #[test]
    fn unparsable_runs_stay_opaque() {
        let mut lx = Tokenizer::new("x+2y".chars());
        let expect = [
            Cell::Opaque("x".to_string()),
            Cell::BinOp('+'),
            Cell::Opaque("2y".to_string()),
        ];
        for exp_cell in expect.iter() {
            assert_eq!(*exp_cell, lx.next().unwrap());
        }
        assert_eq!(lx.next(), None);
    }

    #[test]
    fn empty_input() {
        assert_eq!(Tokenizer::new("".chars()).next(), None);
        assert_eq!(Tokenizer::new("   ".chars()).next(), None);
    }
}
