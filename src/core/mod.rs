//! Core building blocks shared by the resolver and both search engines:
//! players, seeded RNG, and search budgets.

pub mod budget;
pub mod player;
pub mod rng;

pub use budget::{BudgetTracker, Deadline, SearchBudget};
pub use player::Player;
pub use rng::GameRng;
