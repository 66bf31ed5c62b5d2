use crate::converter::PostfixConverter;
use cellstack::Cell;

#[derive(PartialEq, Debug)]
pub enum EvalError {
    // an opaque operand reached arithmetic
    NonNumericOperand(String),
    // the sequence didn't reduce to exactly one value
    WrongNumberOfOperands,
    // a cell that has no business in a postfix sequence
    BadCell(String),
}

impl PostfixConverter {
    /// Drain the converted postfix sequence, bottom first, and reduce it to
    /// a single value. IEEE specials are results here, not errors: 5/0 is
    /// inf and (0-2)^0.5 is NaN.
    pub fn evaluate(&mut self) -> Result<f64, EvalError> {
        let mut values = Vec::new();
        while let Ok(cell) = self.postfix.pop_front() {
            match cell {
                Cell::Number(num) => values.push(num),
                Cell::Opaque(text) => return Err(EvalError::NonNumericOperand(text)),
                Cell::BinOp(op) => {
                    // right operand was pushed last
                    let r = values.pop().ok_or(EvalError::WrongNumberOfOperands)?;
                    let l = values.pop().ok_or(EvalError::WrongNumberOfOperands)?;
                    match op {
                        '+' => values.push(l + r),
                        '-' => values.push(l - r),
                        '*' => values.push(l * r),
                        '/' => values.push(l / r),
                        '^' => values.push(l.powf(r)),
                        other => return Err(EvalError::BadCell(other.to_string())),
                    }
                }
                Cell::OParen | Cell::CParen => {
                    return Err(EvalError::BadCell(cell.to_string()))
                }
            }
        }
        match values.pop() {
            Some(result) if values.is_empty() => Ok(result),
            _ => Err(EvalError::WrongNumberOfOperands),
        }
    }
}
