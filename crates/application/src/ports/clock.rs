/// Source of wall-clock seconds for staleness decisions.
///
/// Injected so tests can move time forward without sleeping.
pub trait Clock: Send + Sync {
    fn now_secs(&self) -> u64;
}
