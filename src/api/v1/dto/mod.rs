pub mod lectures;
