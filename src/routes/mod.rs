pub mod calc;
pub mod health;
pub mod players;
pub mod simulate;
