pub mod get_stats;
pub mod refresh;
pub mod resolve;

pub use get_stats::GetNameCacheStatsUseCase;
pub use refresh::RefreshNamesUseCase;
pub use resolve::ResolveNameUseCase;
