pub mod day_12;
