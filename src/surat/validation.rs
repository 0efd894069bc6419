//! Input validation for leave-request data entry.
//!
//! Provides clear, descriptive validation errors for the administrative
//! create/update endpoints. The form renderer itself never validates: an
//! unknown enumeration value degrades to an unmarked cell on the printed
//! form, so conformance is enforced here at the data-entry boundary only.

use std::fmt;

use super::surat_cuti::{JENIS_CUTI, SATUAN_CUTI};

/// Validation error with detailed, user-friendly messages.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message in Indonesian
    pub message: String,
    /// Suggestion for how to fix the error
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create error for empty required field
    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} tidak boleh kosong", label)).with_suggestion(format!(
            "Mohon isi {} dengan data yang valid",
            label.to_lowercase()
        ))
    }

    /// Create error for invalid NIP format
    pub fn invalid_nip(field: &str) -> Self {
        Self::new(field, "NIP harus terdiri dari 18 digit angka")
            .with_suggestion("Periksa kembali NIP sesuai SK, contoh: 198501012010121001")
    }

    /// Create error for invalid phone number
    pub fn invalid_phone(field: &str) -> Self {
        Self::new(field, "Nomor telepon tidak valid")
            .with_suggestion("Gunakan format nomor telepon Indonesia, contoh: 08123456789")
    }

    /// Create error for a value outside a closed option list
    pub fn unknown_option(field: &str, value: &str, options: &[&str]) -> Self {
        Self::new(field, format!("Nilai '{}' tidak dikenal", value))
            .with_suggestion(format!("Pilih salah satu dari: {}", options.join(", ")))
    }

    /// Create error for non-positive duration
    pub fn invalid_durasi(field: &str) -> Self {
        Self::new(field, "Lama cuti harus lebih dari 0")
            .with_suggestion("Isi lama cuti dengan angka positif, contoh: 5")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors with formatted output.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Get formatted error message suitable for an API response
    pub fn to_message(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut parts = vec![format!(
            "Validasi gagal: {} kesalahan ditemukan\n",
            self.errors.len()
        )];

        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }

        parts.push(String::new());
        parts.push("Mohon perbaiki data di atas dan coba lagi.".to_string());

        parts.join("\n")
    }

    /// Convert to Result - Ok if no errors, Err with formatted message if errors exist
    pub fn into_result(self) -> Result<(), String> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.to_message())
        }
    }
}

// ============================================================================
// Validation functions
// ============================================================================

/// Validate that a string is not empty after trimming
pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

/// Validate NIP format (18 digits)
pub fn validate_nip(value: &str, field: &str, errors: &mut ValidationErrors) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(ValidationError::empty_field(field, "NIP"));
        return;
    }

    if trimmed.len() != 18 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        errors.add(ValidationError::invalid_nip(field));
    }
}

/// Validate phone number format
pub fn validate_phone(value: &str, field: &str, errors: &mut ValidationErrors) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(ValidationError::empty_field(field, "Nomor Telepon"));
        return;
    }

    // Remove common separators
    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();

    // Indonesian phone numbers should be 10-13 digits
    if digits.len() < 10 || digits.len() > 13 {
        errors.add(ValidationError::invalid_phone(field));
    }
}

/// Validate leave type against the closed six-value list
pub fn validate_jenis_cuti(value: &str, field: &str, errors: &mut ValidationErrors) {
    if !JENIS_CUTI.contains(&value) {
        errors.add(ValidationError::unknown_option(field, value, &JENIS_CUTI));
    }
}

/// Validate duration unit against the closed three-value list
pub fn validate_satuan_cuti(value: &str, field: &str, errors: &mut ValidationErrors) {
    if !SATUAN_CUTI.contains(&value) {
        errors.add(ValidationError::unknown_option(field, value, &SATUAN_CUTI));
    }
}

/// Validate that a leave duration is positive
pub fn validate_durasi(value: i32, field: &str, errors: &mut ValidationErrors) {
    if value <= 0 {
        errors.add(ValidationError::invalid_durasi(field));
    }
}
