pub mod mock_factory;

pub use mock_factory::{MockError, MockFactory};
