//! Operator tests, kept out of the implementation files.

mod unary_operators_tests;
