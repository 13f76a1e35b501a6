//! Stack applications: bracket matching and arithmetic expressions
//!
//! Infix expressions are converted to postfix with the shunting-yard algorithm
//! and then evaluated with an operand stack.
//!
//! # Grammar
//!
//! - Integer literals (non-negative; write `0 - n` for negatives)
//! - Binary operators `+ - * /` (left-associative) and `^` (right-associative)
//! - Parentheses for grouping
//!
//! Precedence, lowest first: `+ -`, `* /`, `^`.
//!
//! Evaluation uses checked `i64` arithmetic: overflow and division by zero are
//! reported as [`ExprError`] values rather than panics.

use crate::collections::LinkedStack;
use std::fmt;

/// Errors raised while parsing or evaluating an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// A character that is not a digit, operator, bracket or space
    UnexpectedChar { ch: char, position: usize },

    /// A numeric literal that does not fit in `i64`
    LiteralTooLarge { position: usize },

    /// Unbalanced parenthesis, located by token index
    MismatchedParen { token: usize },

    /// An operator without enough operands
    MissingOperand { operator: char },

    /// An operand or `(` where an operator was expected (infix `1 2`), by token index
    MissingOperator { token: usize },

    /// Division by zero
    DivisionByZero,

    /// Arithmetic result outside the `i64` range
    Overflow { operator: char },

    /// No tokens at all
    Empty,

    /// Operands left over after postfix evaluation (e.g. postfix `1 2`)
    TrailingOperands { count: usize },
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::UnexpectedChar { ch, position } => {
                write!(f, "Unexpected character '{}' at position {}", ch, position)
            }
            ExprError::LiteralTooLarge { position } => {
                write!(f, "Number literal at position {} is too large", position)
            }
            ExprError::MismatchedParen { token } => {
                write!(f, "Mismatched parenthesis at token {}", token)
            }
            ExprError::MissingOperand { operator } => {
                write!(f, "Operator '{}' is missing an operand", operator)
            }
            ExprError::MissingOperator { token } => {
                write!(f, "Expected an operator at token {}", token)
            }
            ExprError::DivisionByZero => write!(f, "Division by zero"),
            ExprError::Overflow { operator } => {
                write!(f, "Integer overflow in operation '{}'", operator)
            }
            ExprError::Empty => write!(f, "Empty expression"),
            ExprError::TrailingOperands { count } => {
                write!(f, "Expression leaves {} operands on the stack", count)
            }
        }
    }
}

impl std::error::Error for ExprError {}

/// A lexical token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Number(i64),
    Operator(char),
    LeftParen,
    RightParen,
}

impl Token {
    fn precedence(self) -> u8 {
        match self {
            Token::Operator('+') | Token::Operator('-') => 1,
            Token::Operator('*') | Token::Operator('/') => 2,
            Token::Operator('^') => 3,
            _ => 0,
        }
    }

    fn is_right_associative(self) -> bool {
        matches!(self, Token::Operator('^'))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// Whether every `([{` is closed by its matching bracket in the right order;
/// other characters are ignored
pub fn is_balanced(text: &str) -> bool {
    let mut open: LinkedStack<char> = LinkedStack::new();
    for c in text.chars() {
        match c {
            '(' | '[' | '{' => open.push(c),
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if open.pop() != Ok(expected) {
                    return false;
                }
            }
            _ => {}
        }
    }
    open.is_empty()
}

/// Split an infix expression into tokens
pub fn tokenize(expr: &str) -> Result<Vec<Token>, ExprError> {
    let mut tokens = Vec::new();
    let mut chars = expr.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        match c {
            ' ' | '\t' => {}
            '0'..='9' => {
                let mut value = i64::from(c as u8 - b'0');
                while let Some(&(_, d)) = chars.peek() {
                    let Some(digit) = d.to_digit(10) else { break };
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(i64::from(digit)))
                        .ok_or(ExprError::LiteralTooLarge { position })?;
                    chars.next();
                }
                tokens.push(Token::Number(value));
            }
            '+' | '-' | '*' | '/' | '^' => tokens.push(Token::Operator(c)),
            '(' => tokens.push(Token::LeftParen),
            ')' => tokens.push(Token::RightParen),
            _ => return Err(ExprError::UnexpectedChar { ch: c, position }),
        }
    }

    Ok(tokens)
}

/// Shunting-yard conversion from infix tokens to postfix order
///
/// Operands and operators must alternate: `1 2` fails with
/// [`ExprError::MissingOperator`] and `+ 1` with [`ExprError::MissingOperand`].
pub fn infix_to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ExprError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: LinkedStack<Token> = LinkedStack::new();
    // Set when the next token must be a number or `(`
    let mut expect_operand = true;

    for (index, &token) in tokens.iter().enumerate() {
        match token {
            Token::Number(_) | Token::LeftParen if !expect_operand => {
                return Err(ExprError::MissingOperator { token: index });
            }
            Token::Number(_) => {
                output.push(token);
                expect_operand = false;
            }
            Token::LeftParen => operators.push(token),
            Token::Operator(op) => {
                if expect_operand {
                    return Err(ExprError::MissingOperand { operator: op });
                }
                while let Ok(&top) = operators.peek() {
                    let pops = matches!(top, Token::Operator(_))
                        && (top.precedence() > token.precedence()
                            || (top.precedence() == token.precedence()
                                && !token.is_right_associative()));
                    if !pops {
                        break;
                    }
                    output.push(top);
                    let _ = operators.pop();
                }
                operators.push(token);
                expect_operand = true;
            }
            Token::RightParen => {
                if expect_operand {
                    return Err(match index.checked_sub(1).map(|i| tokens[i]) {
                        Some(Token::Operator(op)) => ExprError::MissingOperand { operator: op },
                        Some(Token::LeftParen) => ExprError::Empty,
                        _ => ExprError::MismatchedParen { token: index },
                    });
                }
                loop {
                    match operators.pop() {
                        Ok(Token::LeftParen) => break,
                        Ok(top) => output.push(top),
                        Err(_) => return Err(ExprError::MismatchedParen { token: index }),
                    }
                }
            }
        }
    }

    if let Some(&Token::Operator(op)) = tokens.last() {
        return Err(ExprError::MissingOperand { operator: op });
    }

    while let Ok(top) = operators.pop() {
        if top == Token::LeftParen {
            return Err(ExprError::MismatchedParen {
                token: tokens.len(),
            });
        }
        output.push(top);
    }

    Ok(output)
}

/// Evaluate postfix tokens with an operand stack
pub fn evaluate_postfix(tokens: &[Token]) -> Result<i64, ExprError> {
    if tokens.is_empty() {
        return Err(ExprError::Empty);
    }
    let mut operands: LinkedStack<i64> = LinkedStack::new();

    for (index, &token) in tokens.iter().enumerate() {
        match token {
            Token::Number(n) => operands.push(n),
            Token::Operator(op) => {
                let rhs = operands
                    .pop()
                    .map_err(|_| ExprError::MissingOperand { operator: op })?;
                let lhs = operands
                    .pop()
                    .map_err(|_| ExprError::MissingOperand { operator: op })?;
                operands.push(apply(op, lhs, rhs)?);
            }
            Token::LeftParen | Token::RightParen => {
                return Err(ExprError::MismatchedParen { token: index });
            }
        }
    }

    let result = operands.pop().map_err(|_| ExprError::Empty)?;
    if !operands.is_empty() {
        return Err(ExprError::TrailingOperands {
            count: operands.len() + 1,
        });
    }
    Ok(result)
}

/// Tokenize, convert and evaluate an infix expression
pub fn evaluate(expr: &str) -> Result<i64, ExprError> {
    let tokens = tokenize(expr)?;
    let postfix = infix_to_postfix(&tokens)?;
    evaluate_postfix(&postfix)
}

/// Render tokens separated by spaces
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn apply(op: char, lhs: i64, rhs: i64) -> Result<i64, ExprError> {
    let overflow = ExprError::Overflow { operator: op };
    match op {
        '+' => lhs.checked_add(rhs).ok_or(overflow),
        '-' => lhs.checked_sub(rhs).ok_or(overflow),
        '*' => lhs.checked_mul(rhs).ok_or(overflow),
        '/' => {
            if rhs == 0 {
                Err(ExprError::DivisionByZero)
            } else {
                lhs.checked_div(rhs).ok_or(overflow)
            }
        }
        '^' => {
            let exp = u32::try_from(rhs).map_err(|_| overflow.clone())?;
            lhs.checked_pow(exp).ok_or(overflow)
        }
        _ => Err(ExprError::MissingOperand { operator: op }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_brackets() {
        assert!(is_balanced("{[()()]}"));
        assert!(is_balanced("a(b)c"));
        assert!(is_balanced(""));
        assert!(!is_balanced("(]"));
        assert!(!is_balanced("(("));
        assert!(!is_balanced("())"));
    }

    #[test]
    fn test_infix_to_postfix() {
        let tokens = tokenize("3 + 4 * 2 / (1 - 5) ^ 2 ^ 3").unwrap();
        let postfix = infix_to_postfix(&tokens).unwrap();
        assert_eq!(format_tokens(&postfix), "3 4 2 * 1 5 - 2 3 ^ ^ / +");
    }

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate("2 + 3 * 4"), Ok(14));
        assert_eq!(evaluate("(2 + 3) * 4"), Ok(20));
        assert_eq!(evaluate("2 ^ 3 ^ 2"), Ok(512));
        assert_eq!(evaluate("20 - 5 - 3"), Ok(12));
        assert_eq!(evaluate("7 / 2"), Ok(3));
    }

    #[test]
    fn test_evaluate_errors() {
        assert_eq!(evaluate("1 / 0"), Err(ExprError::DivisionByZero));
        assert_eq!(evaluate("(1 + 2"), Err(ExprError::MismatchedParen { token: 4 }));
        assert_eq!(evaluate("1 + 2)"), Err(ExprError::MismatchedParen { token: 3 }));
        assert_eq!(evaluate(") 1"), Err(ExprError::MismatchedParen { token: 0 }));
        assert_eq!(evaluate("1 +"), Err(ExprError::MissingOperand { operator: '+' }));
        assert_eq!(evaluate(""), Err(ExprError::Empty));
        assert_eq!(
            evaluate("2 $ 3"),
            Err(ExprError::UnexpectedChar { ch: '$', position: 2 })
        );
        assert_eq!(evaluate("2 ^ 64"), Err(ExprError::Overflow { operator: '^' }));
        assert_eq!(
            evaluate("99999999999999999999"),
            Err(ExprError::LiteralTooLarge { position: 0 })
        );
    }

    #[test]
    fn test_operands_and_operators_must_alternate() {
        assert_eq!(evaluate("1 2 +"), Err(ExprError::MissingOperator { token: 1 }));
        assert_eq!(evaluate("+ 1 2"), Err(ExprError::MissingOperand { operator: '+' }));
        assert_eq!(evaluate("(1 2 *)"), Err(ExprError::MissingOperator { token: 2 }));
        assert_eq!(evaluate("2 (3)"), Err(ExprError::MissingOperator { token: 1 }));
        assert_eq!(evaluate("1 * * 2"), Err(ExprError::MissingOperand { operator: '*' }));
        assert_eq!(evaluate("(1 -)"), Err(ExprError::MissingOperand { operator: '-' }));
        assert_eq!(evaluate("()"), Err(ExprError::Empty));
        assert_eq!(evaluate("((4))"), Ok(4));
    }

    #[test]
    fn test_arithmetic_errors_through_infix() {
        assert_eq!(
            evaluate("9223372036854775807 + 1"),
            Err(ExprError::Overflow { operator: '+' })
        );
        assert_eq!(
            evaluate("0 - 1 - 9223372036854775807 - 1"),
            Err(ExprError::Overflow { operator: '-' })
        );
        assert_eq!(
            evaluate("3037000500 * 3037000500"),
            Err(ExprError::Overflow { operator: '*' })
        );
        assert_eq!(evaluate("2 ^ (0 - 1)"), Err(ExprError::Overflow { operator: '^' }));
        assert_eq!(evaluate("5 / (2 - 2)"), Err(ExprError::DivisionByZero));
    }

    #[test]
    fn test_postfix_paren_is_rejected() {
        let postfix = [Token::Number(1), Token::LeftParen];
        assert_eq!(
            evaluate_postfix(&postfix),
            Err(ExprError::MismatchedParen { token: 1 })
        );
    }

    #[test]
    fn test_trailing_operands() {
        let postfix = [Token::Number(1), Token::Number(2)];
        assert_eq!(
            evaluate_postfix(&postfix),
            Err(ExprError::TrailingOperands { count: 2 })
        );
    }
}
