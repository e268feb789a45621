//! 밸브 유량계수(Cv/Kv)와 조절밸브 사이징.

pub mod cv;
pub mod sizing;

pub use cv::*;
pub use sizing::*;
