pub mod confirm;
pub mod failure;
pub mod parse;
