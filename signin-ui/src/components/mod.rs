// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod google_login_button;
pub mod google_sign_in_button;
pub mod icons;
pub mod login_form;
