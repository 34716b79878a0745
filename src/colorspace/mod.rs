pub mod bridge;
pub mod lab;

pub use self::bridge::{to_external, to_internal, to_rgb};
pub use self::lab::{merge_lab, split_lab, LabPlanes};
