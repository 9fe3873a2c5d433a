// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{MockUpstream, TEST_API_KEY};
#[allow(unused_imports)]
pub use helpers::{
    body_json, create_test_app, create_test_app_with_upstream, send, send_json,
    UNREACHABLE_UPSTREAM,
};
