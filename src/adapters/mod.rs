pub mod mock_registry;

#[cfg(test)]
pub mod test_helpers;

pub use mock_registry::MockRegistry;
