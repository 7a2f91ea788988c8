pub mod list_ops;
pub mod exclude_ops;
