mod character;
mod fight;
mod fighter;
mod score;

pub use character::{Character, FighterKind};
pub use fight::{Fight, NewFight};
pub use fighter::{Fighter, Fighters};
pub use score::Score;
