pub mod authmw;
pub mod rate_limit;
