pub mod arterial;
pub mod clahe;
pub mod contrast;
pub mod venous;
