//! Screen template renderers.
//!
//! One function per screen variant, all with the uniform
//! `fn(&ScreenConfig, &mut Canvas)` shape so the registry can dispatch
//! by screen ID. Templates draw structural wireframe layouts driven by
//! the configuration; see [`crate::canvas`] for the text-bar
//! convention.

pub mod auth;
pub mod home;
pub mod kyc;
pub mod onboarding;
pub mod shared;
pub mod splash;
