use cellstack::{Cell, Stack, Tokenizer};

#[derive(PartialEq, Debug)]
pub enum ParseError {
    MissingOParen,
    MissingCParen,
}

// '+','-' bind loosest, '^' tightest; '(' sits below every operator so a
// precedence flush never reaches past it. Everything is left-associative,
// '^' included: 2^3^2 converts as (2^3)^2. That matches the program this
// one replaces, even though calculators usually nest '^' to the right.
fn precedence(cell: &Cell) -> usize {
    match cell {
        Cell::BinOp('+') | Cell::BinOp('-') => 1,
        Cell::BinOp('*') | Cell::BinOp('/') => 2,
        Cell::BinOp('^') => 3,
        _ => 0,
    }
}

/// Converts infix expressions to postfix with the shunting-yard algorithm.
/// The converted sequence stays on the converter until `evaluate` drains
/// it, `render_postfix(true)` clears it, or `clear` is called; conversions
/// in between accumulate onto it.
#[derive(Default)]
pub struct PostfixConverter {
    // operators and open parens awaiting placement; reset on every convert
    pub(crate) pending: Stack,
    // converted output, bottom cell is the leftmost postfix token
    pub(crate) postfix: Stack,
}

impl PostfixConverter {
    pub fn new() -> PostfixConverter {
        PostfixConverter { pending: Stack::new(), postfix: Stack::new() }
    }

    pub fn convert(&mut self, expr: &str) -> Result<(), ParseError> {
        self.pending.clear();
        // sentinel paren pair: one below the whole scan, one chained after
        // the input, so the end of input flushes like any other ')'
        self.pending.push(Cell::OParen);
        let cells = Tokenizer::new(expr.chars()).chain(std::iter::once(Cell::CParen));
        for cell in cells {
            match cell {
                Cell::Number(_) | Cell::Opaque(_) => self.postfix.push(cell),
                Cell::OParen => self.pending.push(cell),
                Cell::BinOp(_) => {
                    while let Ok(top) = self.pending.peek() {
                        if precedence(top) < precedence(&cell) {
                            break;
                        }
                        if let Ok(op) = self.pending.pop() {
                            self.postfix.push(op);
                        }
                    }
                    self.pending.push(cell);
                }
                Cell::CParen => loop {
                    match self.pending.pop() {
                        Ok(Cell::OParen) => break, // discarded, not emitted
                        Ok(op) => self.postfix.push(op),
                        Err(_) => return Err(ParseError::MissingOParen),
                    }
                },
            }
        }
        // balanced input leaves nothing: the sentinels matched each other
        if !self.pending.is_empty() {
            self.pending.clear();
            return Err(ParseError::MissingCParen);
        }
        Ok(())
    }

    /// Drop anything held over from previous conversions.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.postfix.clear();
    }
}
