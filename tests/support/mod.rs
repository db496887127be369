// tests/support/mod.rs
// Shared by several integration test binaries; each binary uses a subset, so
// unused-item warnings are silenced at the module level.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod stub_cms;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
#[allow(unused_imports)]
pub use stub_cms::*;
