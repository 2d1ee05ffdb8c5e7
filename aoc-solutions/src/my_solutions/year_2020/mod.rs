pub mod day_8;
pub mod day_10;
