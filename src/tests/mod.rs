//! Unit and orchestration tests, split by layer.

mod service_tests;
