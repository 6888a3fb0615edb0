/// Bind address settings, parsed with [`clap`] from flags and environment variables.
///
/// [`clap`]: https://docs.rs/clap
pub mod config;

/// Router construction, binding and serving
///
/// The handlers live in the `routes/**` child modules of this
pub mod http;
