// Common test utilities

pub mod fixtures;
pub mod harness;
pub mod mock_transport;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use harness::*;
#[allow(unused_imports)]
pub use mock_transport::*;
