use anyhow::Result;
use clap::Parser;
use ospack::assemble::{AssembleConfig, assemble, clean};
use ospack::platform::Platform;
use std::path::PathBuf;

/// ospack - release assembler for the ospf C++ libraries
///
/// Prepares the x64 build scaffolding, optionally runs the compile script,
/// and copies public headers plus prebuilt libraries and binaries into
/// release/cpp/<platform-triple>/{include,lib,bin}.
///
/// Examples:
///   ospack assemble                  # Assemble a release under the current directory
///   ospack assemble --skip-build     # Package existing build output as-is
#[derive(Parser, Debug)]
#[command(author, version = env!("OSPACK_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project root directory (defaults to the current directory; also via OSPACK_ROOT)
    #[arg(
        long = "root",
        short = 'r',
        env = "OSPACK_ROOT",
        value_name = "PATH",
        global = true
    )]
    pub root: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Assemble the release tree
    Assemble(AssembleArgs),

    /// Remove the assembled release tree
    Clean(CleanArgs),
}

#[derive(clap::Args, Debug)]
pub struct AssembleArgs {
    /// Override the platform-compiler triple namespacing the release tree
    #[arg(long = "triple", value_name = "TRIPLE")]
    pub triple: Option<String>,

    /// Skip the compile script and package existing build output
    #[arg(long = "skip-build")]
    pub skip_build: bool,
}

#[derive(clap::Args, Debug)]
pub struct CleanArgs {}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = ospack::runtime::RealRuntime;
    let root = match cli.root {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Assemble(args) => {
            let config = AssembleConfig {
                root,
                platform: Platform::detect(),
                triple: args.triple,
                skip_build: args.skip_build,
            };
            assemble(&runtime, &config)?
        }
        Commands::Clean(_args) => clean(&runtime, &root)?,
    }
    Ok(())
}
