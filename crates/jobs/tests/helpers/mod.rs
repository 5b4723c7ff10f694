mod mock_resolver;

pub use mock_resolver::MockNameResolver;
