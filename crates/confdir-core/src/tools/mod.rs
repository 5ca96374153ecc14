//! File system adapters.
//!
//! This module provides the adapter trait a configured directory performs its
//! I/O through, a real `std::fs` implementation, an in-memory mock for tests,
//! and the structured read/write extension shared by all of them.

pub mod fs;
pub mod fs_impl;
pub mod fs_mock;
pub mod structured;

pub use fs::FsAdapter;
pub use fs_impl::StdFsAdapter;
pub use fs_mock::MockFsAdapter;
pub use structured::StructuredFs;
