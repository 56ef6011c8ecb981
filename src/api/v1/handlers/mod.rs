pub mod health;
pub mod lectures;
