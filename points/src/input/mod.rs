//! Reading networks and queries from the text format.

pub mod network;
pub mod parser_utils;
pub mod problem_parser;
