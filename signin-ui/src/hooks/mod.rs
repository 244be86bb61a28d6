// SPDX-License-Identifier: MIT OR Apache-2.0

mod use_script;

pub use use_script::use_script;
