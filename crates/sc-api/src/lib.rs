mod package_writer;

pub use package_writer::{read_package_dir, DirectoryPackageWriter, PackageWriter};

use std::fs;
use std::path::Path;

use sc_compiler::{assemble, safe_name, SpellPackage};
use sc_core::{export_document_json, import_document_json, SpellDocument, SpellcastError};
use tracing::info;

const DEFAULT_EXPORT_STEM: &str = "spell";
const DEFAULT_PACKAGE_NAME: &str = "Spell_Name";

pub fn compile_spell_from_json(source: &str) -> Result<SpellPackage, SpellcastError> {
    let document = import_document_json(source)?;
    assemble(&document)
}

/// Replaces `current` with the imported document. On failure `current` is
/// left as it was.
pub fn import_into(current: &mut SpellDocument, source: &str) -> Result<(), SpellcastError> {
    let mut imported = import_document_json(source)?;
    imported.selected_index = 0;
    *current = imported;
    Ok(())
}

pub fn read_document(path: &Path) -> Result<SpellDocument, SpellcastError> {
    let raw =
        fs::read_to_string(path).map_err(|error| SpellcastError::io("read", path, error))?;
    import_document_json(&raw)
}

pub fn write_document(path: &Path, document: &SpellDocument) -> Result<(), SpellcastError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|error| SpellcastError::io("create", parent, error))?;
    }
    let payload = export_document_json(document)?;
    fs::write(path, payload + "\n").map_err(|error| SpellcastError::io("write", path, error))
}

/// File name used when exporting a document as JSON.
pub fn export_file_name(document: &SpellDocument) -> String {
    let stem = if document.name.trim().is_empty() {
        DEFAULT_EXPORT_STEM.to_string()
    } else {
        safe_name(&document.name)
    };
    format!("{}.json", stem)
}

/// Name of the package artifact, taken from the display name as typed.
pub fn package_name(document: &SpellDocument) -> String {
    let name = document.name.trim();
    if name.is_empty() {
        return DEFAULT_PACKAGE_NAME.to_string();
    }
    let cleaned = name
        .chars()
        .map(|ch| {
            if matches!(ch, '/' | '\\' | ':') || ch.is_control() {
                '_'
            } else {
                ch
            }
        })
        .collect::<String>();
    // `.` and `..` would resolve outside the package directory.
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.trim().is_empty() {
        DEFAULT_PACKAGE_NAME.to_string()
    } else {
        cleaned.to_string()
    }
}

/// Compiles `document` and hands the result to `writer`. Nothing is written
/// when compilation fails.
pub fn export_package(
    document: &SpellDocument,
    writer: &mut dyn PackageWriter,
) -> Result<SpellPackage, SpellcastError> {
    let package = assemble(document)?;
    writer.write_package(&package)?;
    info!(
        spell_id = %package.spell_id,
        files = package.files.len(),
        "exported spell package"
    );
    Ok(package)
}
