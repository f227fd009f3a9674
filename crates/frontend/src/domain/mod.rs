pub mod a001_advantage;
