//! Building blocks shared by the solutions

pub mod grid;
pub mod memo;
pub mod search;
