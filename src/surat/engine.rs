//! Typst rendering engine.
//!
//! Handles the low-level details of writing Typst source to temporary files,
//! invoking the compiler, and reading back the output PDF.

use std::fs;
use std::process::Command;
use tempfile::tempdir;
use tempfile::TempDir;

use super::GeneratorError;

/// Stateless engine for compiling Typst source to PDF bytes.
pub struct TypstRenderEngine;

impl TypstRenderEngine {
    /// Compile a complete Typst source string to a single PDF byte buffer.
    ///
    /// # Arguments
    /// * `template_filename` - The name of the source file (e.g., "surat.typ")
    ///   used inside the compilation directory and for logging.
    /// * `typst_source` - The complete, rendered Typst source code string.
    pub fn render(template_filename: &str, typst_source: &str) -> Result<Vec<u8>, GeneratorError> {
        let temp_dir = tempdir().map_err(GeneratorError::TempDir)?;
        let typ_path = temp_dir.path().join(template_filename);

        fs::write(&typ_path, typst_source).map_err(GeneratorError::WriteTypst)?;

        let output_filename = format!("{}.pdf", template_filename.trim_end_matches(".typ"));

        compile_typst_to_pdf(&temp_dir, template_filename, &output_filename)
    }
}

/// Compile a Typst source file to PDF.
fn compile_typst_to_pdf(
    temp_dir: &TempDir,
    typ_filename: &str,
    output_filename: &str,
) -> Result<Vec<u8>, GeneratorError> {
    let typ_path = temp_dir.path().join(typ_filename);
    let output_path = temp_dir.path().join(output_filename);

    let status = Command::new("typst")
        .arg("compile")
        .arg(&typ_path)
        .arg(&output_path)
        .current_dir(temp_dir.path())
        .status()
        .map_err(GeneratorError::TypstIo)?;

    if !status.success() {
        let code = status.code().unwrap_or(-1);
        return Err(GeneratorError::TypstExit(code));
    }

    fs::read(&output_path).map_err(GeneratorError::ReadPdf)
}
