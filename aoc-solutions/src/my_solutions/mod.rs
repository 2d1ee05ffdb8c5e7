pub mod year_2020;
pub mod year_2021;
pub mod year_2022;
