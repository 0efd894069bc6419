//! Surat module - business logic for rendering leave-request forms to PDF.
//!
//! The only document produced here is the `Formulir Permintaan dan Pemberian
//! Cuti`, a fixed-layout F4 form. `surat_cuti` builds the Typst source for
//! the form, `engine` compiles it to PDF bytes, `validation` guards the
//! data-entry boundary.

pub mod common;
pub mod engine;
pub mod surat_cuti;
pub mod validation;

pub use engine::TypstRenderEngine;
pub use surat_cuti::{PegawaiData, SuratCutiData, SuratCutiGenerator};

use thiserror::Error;

/// Trait for validating incoming request payloads before they reach the
/// database. The renderer itself never validates; see `validation`.
pub trait Validator {
    /// Validate the state of the object.
    fn validate(&self) -> Result<(), String>;
}

/// Trait for document generators.
pub trait Generator<Req> {
    /// Generate a document from the request.
    fn generate(&self, request: Req) -> Result<GeneratedDocument, GeneratorError>;
}

/// Errors that can occur during document generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("failed to write Typst source: {0}")]
    WriteTypst(#[source] std::io::Error),
    #[error("Typst CLI execution failed: {0}")]
    TypstIo(#[source] std::io::Error),
    #[error("Typst CLI exited with status {0}")]
    TypstExit(i32),
    #[error("failed to read generated PDF: {0}")]
    ReadPdf(#[source] std::io::Error),
}

/// Result of a successful document generation.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub filename: String,
    pub pdf: Vec<u8>,
    pub tanggal: String,
}
