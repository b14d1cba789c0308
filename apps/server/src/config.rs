/// The configuration parameters for the application
///
/// These can either loaded from command-line, or pulled from environment variables.
///
/// Environment variables are preferred.
///
/// For development convenience, these can also be read from a `.env` file in the working
/// directory where the application is started.
///
/// See `.env.example` in the repository root for details
#[derive(clap::Parser)]
pub struct Config {
    /// Interface the HTTP server binds to
    #[clap(long, env, default_value = "127.0.0.1")]
    pub address: String,

    /// Port the HTTP server listens on
    #[clap(long, env, default_value = "8000")]
    pub port: u16,
}
