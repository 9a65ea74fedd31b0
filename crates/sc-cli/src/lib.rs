use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Parser;
use sc_api::{
    export_package, package_name, read_document, write_document, DirectoryPackageWriter,
};
use sc_compiler::compile_point_preview;
use sc_core::{SpellDocument, SpellcastError};
use tracing::info;

mod cli_args;
mod error_map;
mod logging;

pub(crate) use cli_args::{BuildArgs, Cli, MigrateArgs, Mode, NewArgs, PreviewArgs};
pub(crate) use error_map::emit_error;

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return error.exit_code();
        }
    };
    logging::init();
    match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(error),
    }
}

fn run(cli: Cli) -> Result<i32, SpellcastError> {
    match cli.command {
        Mode::New(args) => run_new(args),
        Mode::Preview(args) => run_preview(args),
        Mode::Build(args) => run_build(args),
        Mode::Migrate(args) => run_migrate(args),
    }
}

fn run_new(args: NewArgs) -> Result<i32, SpellcastError> {
    let mut document = SpellDocument::default();
    if let Some(name) = args.name {
        document.name = name.trim().to_string();
    }
    if let Some(author) = args.author {
        document.author = author;
    }
    write_document(Path::new(&args.out), &document)?;
    println!("RESULT:OK");
    println!("DOCUMENT:{}", args.out);
    Ok(0)
}

fn run_preview(args: PreviewArgs) -> Result<i32, SpellcastError> {
    let document = read_document(Path::new(&args.document))?;
    let index = args.point.unwrap_or(document.selected_index);
    let text = compile_point_preview(&document, index)?;
    println!("{}", text);
    Ok(0)
}

fn run_build(args: BuildArgs) -> Result<i32, SpellcastError> {
    let document = read_document(Path::new(&args.document))?;
    let package_dir = PathBuf::from(&args.out_dir).join(package_name(&document));
    let mut writer = DirectoryPackageWriter::new(&package_dir);
    let package = export_package(&document, &mut writer)?;
    info!(package_dir = %package_dir.display(), "build finished");

    println!("RESULT:OK");
    println!("SPELL_ID:{}", package.spell_id);
    println!("PACKAGE_DIR:{}", package_dir.display());
    println!("FILES:{}", package.files.len());
    for path in package.files.keys() {
        println!("FILE:{}", path);
    }
    Ok(0)
}

fn run_migrate(args: MigrateArgs) -> Result<i32, SpellcastError> {
    let document = read_document(Path::new(&args.document))?;
    write_document(Path::new(&args.out), &document)?;
    println!("RESULT:OK");
    println!("DOCUMENT:{}", args.out);
    Ok(0)
}
