// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inline stroke icons used by the login form.

pub mod eye;
pub mod lock;
pub mod log_in;
pub mod mail;
pub mod wallet;
pub mod waves;

pub use eye::{EyeIcon, EyeOffIcon};
pub use lock::LockIcon;
pub use log_in::LogInIcon;
pub use mail::MailIcon;
pub use wallet::WalletIcon;
pub use waves::WavesIcon;
