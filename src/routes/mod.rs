pub mod decisions;
pub mod health;
