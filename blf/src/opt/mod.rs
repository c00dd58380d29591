pub mod blf_optimizer;
pub mod search;
