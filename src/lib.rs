// SPDX-License-Identifier: MIT OR Apache-2.0

//! outline-icons library root.
//!
//! Re-exports public modules so that integration tests (under `tests/`) can
//! import components.

pub mod components;
