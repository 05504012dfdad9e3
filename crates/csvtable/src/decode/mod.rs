//! Decoding pipeline: records (scanner) then fields (parser)

pub mod parser;
pub mod scanner;
