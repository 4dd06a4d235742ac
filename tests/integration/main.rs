//! Host-side integration test harness.
//!
//! Compiled as a single test binary so all suites share the recording
//! mock display.

mod mock_display;

mod dispatch_tests;
