// Game engine modules

pub mod grid;
pub mod results;
pub mod scorer;
pub mod solver;
pub mod validator;

pub use grid::GridGenerator;
pub use results::{ResultRow, RoundResult, WordStatus};
pub use scorer::Scorer;
pub use solver::{find_all, Pruning, SearchOptions, Solver, DEFAULT_MIN_WORD_LENGTH};
pub use validator::PathValidator;
