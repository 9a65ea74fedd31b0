use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "sc-cli")]
#[command(about = "Spellcast pack compiler")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Mode,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Mode {
    New(NewArgs),
    Preview(PreviewArgs),
    Build(BuildArgs),
    Migrate(MigrateArgs),
}

#[derive(Debug, Args)]
pub(crate) struct NewArgs {
    #[arg(long = "out")]
    pub(crate) out: String,
    #[arg(long = "name")]
    pub(crate) name: Option<String>,
    #[arg(long = "author")]
    pub(crate) author: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct PreviewArgs {
    #[arg(long = "document")]
    pub(crate) document: String,
    #[arg(long = "point")]
    pub(crate) point: Option<usize>,
}

#[derive(Debug, Args)]
pub(crate) struct BuildArgs {
    #[arg(long = "document")]
    pub(crate) document: String,
    #[arg(long = "out-dir")]
    pub(crate) out_dir: String,
}

#[derive(Debug, Args)]
pub(crate) struct MigrateArgs {
    #[arg(long = "document")]
    pub(crate) document: String,
    #[arg(long = "out")]
    pub(crate) out: String,
}
