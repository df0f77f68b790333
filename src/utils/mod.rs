pub mod calendar_cache;
pub mod seed;
