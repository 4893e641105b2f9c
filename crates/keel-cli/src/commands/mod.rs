pub mod lessons;
pub mod play;
pub mod scenarios;
