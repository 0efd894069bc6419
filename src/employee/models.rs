use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::surat::validation::{validate_nip, validate_required, ValidationErrors};
use crate::surat::Validator;

/// Employee master record. The remaining_* counters are the live leave
/// balances; each leave request snapshots them at filing time.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema, sqlx::FromRow)]
pub struct Employee {
    pub id: i32,
    #[schema(example = "Budi Santoso")]
    pub name: String,
    #[schema(example = "198501012010121001")]
    pub nip: String,
    #[schema(example = "Penjaga Tahanan")]
    pub position: String,
    #[schema(example = "7 Tahun")]
    pub years_of_service: String,
    #[schema(example = "Lapas Kelas IIB Gunung Sugih")]
    pub work_unit: String,
    pub remaining_n2: i32,
    pub remaining_n1: i32,
    pub remaining_n: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEmployeeRequest {
    #[schema(example = "Budi Santoso")]
    pub name: String,
    #[schema(example = "198501012010121001")]
    pub nip: String,
    #[schema(example = "Penjaga Tahanan")]
    pub position: String,
    #[schema(example = "7 Tahun")]
    pub years_of_service: String,
    #[schema(example = "Lapas Kelas IIB Gunung Sugih")]
    pub work_unit: String,
    #[serde(default)]
    pub remaining_n2: i32,
    #[serde(default)]
    pub remaining_n1: i32,
    #[serde(default = "default_remaining_n")]
    pub remaining_n: i32,
}

/// Full-replace update, mirroring the edit form.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEmployeeRequest {
    pub name: String,
    pub nip: String,
    pub position: String,
    pub years_of_service: String,
    pub work_unit: String,
    #[serde(default)]
    pub remaining_n2: i32,
    #[serde(default)]
    pub remaining_n1: i32,
    #[serde(default = "default_remaining_n")]
    pub remaining_n: i32,
}

fn default_remaining_n() -> i32 {
    12
}

impl Validator for CreateEmployeeRequest {
    fn validate(&self) -> Result<(), String> {
        let mut errors = ValidationErrors::new();

        validate_required(&self.name, "name", "Nama Pegawai", &mut errors);
        validate_nip(&self.nip, "nip", &mut errors);
        validate_required(&self.position, "position", "Jabatan", &mut errors);
        validate_required(
            &self.years_of_service,
            "years_of_service",
            "Masa Kerja",
            &mut errors,
        );
        validate_required(&self.work_unit, "work_unit", "Unit Kerja", &mut errors);

        errors.into_result()
    }
}

impl Validator for UpdateEmployeeRequest {
    fn validate(&self) -> Result<(), String> {
        let mut errors = ValidationErrors::new();

        validate_required(&self.name, "name", "Nama Pegawai", &mut errors);
        validate_nip(&self.nip, "nip", &mut errors);
        validate_required(&self.position, "position", "Jabatan", &mut errors);
        validate_required(
            &self.years_of_service,
            "years_of_service",
            "Masa Kerja",
            &mut errors,
        );
        validate_required(&self.work_unit, "work_unit", "Unit Kerja", &mut errors);

        errors.into_result()
    }
}
