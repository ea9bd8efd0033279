use crate::error_handling::*;
use crate::parsing::*;
use crate::scanning::*;

use std::collections::HashMap;

pub struct FunctionTable {
    functions: HashMap<&'static str, fn(f64) -> f64>,
}

impl FunctionTable {
    pub fn new() -> Self {
        let mut functions = HashMap::<&'static str, fn(f64) -> f64>::new();
        functions.insert("sin", f64::sin);
        functions.insert("cos", f64::cos);
        functions.insert("tan", f64::tan);
        functions.insert("sqrt", f64::sqrt);
        Self{functions}
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<fn(f64) -> f64> {
        self.functions.get(name).copied()
    }
}

impl Default for FunctionTable {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Resolver {
    fn resolve(&mut self, name: &str) -> Result<f64>;
}

impl<F: FnMut(&str) -> Result<f64>> Resolver for F {
    fn resolve(&mut self, name: &str) -> Result<f64> {
        self(name)
    }
}

pub struct Evaluator<R: Resolver> {
    variables: HashMap<String, f64>,
    functions: FunctionTable,
    resolver: R,
}

impl<R: Resolver> Evaluator<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            variables: HashMap::new(),
            functions: FunctionTable::new(),
            resolver,
        }
    }

    pub fn bind(&mut self, name: &str, value: f64) {
        self.variables.insert(name.into(), value);
    }

    pub fn evaluate(&mut self, text: &str) -> Result<f64> {
        let tokens = tokenize(text)?;
        let postfix = to_postfix(tokens, &self.functions)?;
        self.evaluate_postfix(&postfix)
    }

    fn variable_value(&mut self, name: &str) -> Result<f64> {
        if let Some(value) = self.variables.get(name) {
            return Ok(*value);
        }
        let value = self.resolver.resolve(name)?;
        self.variables.insert(name.into(), value);
        Ok(value)
    }

    fn evaluate_postfix(&mut self, postfix: &[Token]) -> Result<f64> {
        let mut stack = Vec::<f64>::new();

        for token in postfix {
            match token.kind {
                TokenKind::number => {
                    let value = token.content.parse()
                        .map_err(|_| CalcError::invalid_number(token.content.clone()))?;
                    stack.push(value);
                },
                TokenKind::identifier => {
                    if let Some(function) = self.functions.get(&token.content) {
                        let argument = stack.pop().ok_or(CalcError::malformed_expression)?;
                        stack.push(function(argument));
                    } else {
                        let value = self.variable_value(&token.content)?;
                        stack.push(value);
                    }
                },
                TokenKind::operator => {
                    let right = stack.pop().ok_or(CalcError::malformed_expression)?;
                    let left = stack.pop().ok_or(CalcError::malformed_expression)?;
                    let operator: BinaryOperator = token.content.parse()?;
                    stack.push(operator.call(left, right)?);
                },
                // parentheses never survive conversion to postfix
                TokenKind::punctuation => return Err(CalcError::malformed_expression),
            }
        }

        if stack.len() != 1 {
            return Err(CalcError::malformed_expression);
        }
        Ok(stack[0])
    }
}
