//! Small shared helpers for URLs and dates

pub mod date;
pub mod url;
