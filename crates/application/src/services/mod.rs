pub mod name_cache;

pub use name_cache::NameCache;
