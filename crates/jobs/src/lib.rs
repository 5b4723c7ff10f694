pub mod registry_refresh;

pub use registry_refresh::RegistryRefreshJob;
