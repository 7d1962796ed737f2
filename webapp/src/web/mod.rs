pub mod backend;
pub mod preview;
pub mod storage;
pub mod style;
