pub mod names;

pub use names::{GetNameCacheStatsUseCase, RefreshNamesUseCase, ResolveNameUseCase};
