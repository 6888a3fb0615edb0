pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// The configuration parameters for the application
///
/// Each value is taken from its command-line flag if given, otherwise from the environment
/// variable of the same name (`HOST`, `PORT`), otherwise from the default.
///
/// For development convenience, variables can also be put in a `.env` file in the working
/// directory where the application is started. Variables already set in the process
/// environment win over the file.
///
/// See `.env.example` in the repository root for details
#[derive(clap::Parser, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[clap(long, env, default_value = DEFAULT_HOST)]
    pub host: String,

    #[clap(long, env, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
        }
    }
}
