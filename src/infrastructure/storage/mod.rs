//! Clip storage provisioning

mod output_dir;

pub use output_dir::prepare_output;
