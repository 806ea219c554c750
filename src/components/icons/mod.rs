// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod arrow_down_outline;
