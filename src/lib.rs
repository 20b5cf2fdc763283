pub mod cli;
pub mod codec;
pub mod config;
pub mod cropper;
pub mod error;
pub mod generator;
pub mod logging;
pub mod option_selector;
pub mod session;
