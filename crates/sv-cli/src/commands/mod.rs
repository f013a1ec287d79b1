pub mod baseline;
pub mod smoke;
