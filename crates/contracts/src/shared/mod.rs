pub mod api;
pub mod serde_num;
