//! Configuration file adapter

mod xdg;

pub use xdg::XdgConfigStore;
