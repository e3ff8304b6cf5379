pub mod number;
pub mod parse;
pub mod random;
