pub mod preview;
pub mod seed;
