// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Toutes sont récupérables : la console les affiche et continue.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurEval {
    #[error("stack is empty")]
    EmptyStack,

    #[error("insufficient operands: {required} required, {available} available")]
    InsufficientOperands { required: usize, available: usize },

    #[error("division by zero")]
    DivideByZero,

    #[error("cannot take the square root of a negative number ({0})")]
    NegativeSqrt(f64),

    #[error("fib requires a non-negative integer (got {0})")]
    InvalidFibInput(f64),

    #[error("fib index {0} is too large (max {max})", max = super::operateurs::FIB_MAX)]
    FibOverflow(f64),

    #[error("number out of range: {0}")]
    LiteralOutOfRange(String),

    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    #[error("expression produced no result")]
    EmptyResult,
}
