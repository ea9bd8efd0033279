use crate::error_handling::*;
use crate::evaluating::FunctionTable;
use crate::scanning::*;

use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BinaryOperator {
    addition,
    subtraction,
    multiplication,
    division,
    exponentiation,
}

impl BinaryOperator {
    pub fn precedence(&self) -> i32 {
        use BinaryOperator::*;
        match self {
            addition | subtraction => 1,
            multiplication | division => 2,
            exponentiation => 3,
        }
    }

    pub fn call(&self, left: f64, right: f64) -> Result<f64> {
        use BinaryOperator::*;
        match self {
            addition => Ok(left + right),
            subtraction => Ok(left - right),
            multiplication => Ok(left * right),
            division => {
                if right == 0.0 {
                    Err(CalcError::division_by_zero)
                } else {
                    Ok(left / right)
                }
            },
            exponentiation => Ok(left.powf(right)),
        }
    }
}

impl FromStr for BinaryOperator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        use BinaryOperator::*;
        match s {
            "+" => Ok(addition),
            "-" => Ok(subtraction),
            "*" => Ok(multiplication),
            "/" => Ok(division),
            "^" => Ok(exponentiation),
            _ => Err(CalcError::unknown_operator(s.into())),
        }
    }
}

pub struct Yard<'a> {
    output: Vec<Token>,
    stack: Vec<Token>,
    functions: &'a FunctionTable,
}

impl<'a> Yard<'a> {
    pub fn new(functions: &'a FunctionTable) -> Self {
        Self{output: Vec::new(), stack: Vec::new(), functions}
    }

    fn add_value(&mut self, token: Token) {
        self.output.push(token);
    }

    fn add_function(&mut self, token: Token) {
        self.stack.push(token);
    }

    fn add_left_paren(&mut self, token: Token) {
        self.stack.push(token);
    }

    fn add_right_paren(&mut self) -> Result<()> {
        while let Some(node) = self.stack.pop() {
            if node.content == "(" {
                // a function directly below the opener binds to the
                // argument that was just closed
                let is_function = self.stack.last()
                    .filter(|top| self.functions.contains(&top.content))
                    .is_some();
                if is_function {
                    if let Some(function) = self.stack.pop() {
                        self.output.push(function);
                    }
                }
                return Ok(());
            }
            self.output.push(node);
        }
        Err(CalcError::mismatched_parenthesis)
    }

    fn pop_higher_operator(&mut self, precedence: i32) -> Option<Token> {
        let higher = self.stack.last()
            .filter(|top| {
                top.kind == TokenKind::operator
                    && top.content.parse::<BinaryOperator>()
                                  .map(|operator| operator.precedence() >= precedence)
                                  .unwrap_or(false)
            })
            .is_some();
        if higher {
            self.stack.pop()
        } else {
            None
        }
    }

    fn add_operator(&mut self, token: Token) -> Result<()> {
        let precedence = token.content.parse::<BinaryOperator>()?.precedence();
        while let Some(operator) = self.pop_higher_operator(precedence) {
            self.output.push(operator);
        }
        self.stack.push(token);
        Ok(())
    }

    pub fn finish(mut self) -> Result<Vec<Token>> {
        while let Some(node) = self.stack.pop() {
            if node.content == "(" {
                return Err(CalcError::mismatched_parenthesis);
            }
            self.output.push(node);
        }
        Ok(self.output)
    }
}

pub fn to_postfix(tokens: Vec<Token>, functions: &FunctionTable) -> Result<Vec<Token>> {
    let mut yard = Yard::new(functions);

    for token in tokens {
        match token.kind {
            TokenKind::number => yard.add_value(token),
            TokenKind::identifier => {
                if functions.contains(&token.content) {
                    yard.add_function(token);
                } else {
                    yard.add_value(token);
                }
            },
            TokenKind::operator => yard.add_operator(token)?,
            TokenKind::punctuation => {
                if token.content == "(" {
                    yard.add_left_paren(token);
                } else {
                    yard.add_right_paren()?;
                }
            },
        }
    }
    yard.finish()
}
