pub mod day;
pub mod row;
