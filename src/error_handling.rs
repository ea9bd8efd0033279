use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CalcError {
    #[error("invalid character, '{0}', encountered")]
    invalid_character(char),

    #[error("'{0}' is not a valid number")]
    invalid_number(String),

    #[error("'{0}' is not a known operator")]
    unknown_operator(String),

    #[error("could not find a matching parenthesis")]
    mismatched_parenthesis,

    #[error("cannot divide by zero")]
    division_by_zero,

    #[error("the expression is malformed")]
    malformed_expression,

    #[error("could not resolve a value for '{0}'")]
    variable_resolution(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;
