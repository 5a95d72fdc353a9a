pub mod dice;
pub mod join;
