pub mod contact_queries;
pub mod stats_queries;
