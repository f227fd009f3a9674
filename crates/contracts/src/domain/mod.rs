pub mod a001_advantage;
pub mod a002_company;
pub mod common;
