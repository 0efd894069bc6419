use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::employee::models::Employee;
use crate::surat::validation::{
    validate_durasi, validate_jenis_cuti, validate_phone, validate_required, validate_satuan_cuti,
    ValidationErrors,
};
use crate::surat::Validator;

/// One filed leave request. Balance counters are snapshotted from the
/// employee at filing time and kept as a point-in-time attestation even when
/// the employee's live counters move on.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema, sqlx::FromRow)]
pub struct LeaveRequest {
    pub id: i32,
    pub employee_id: i32,
    #[schema(example = "2025-03-03")]
    pub letter_date: NaiveDate,
    #[schema(example = "Cuti Tahunan")]
    pub leave_type: String,
    #[schema(example = "Keperluan keluarga")]
    pub reason: String,
    #[schema(example = 5)]
    pub duration: i32,
    #[schema(example = "Hari")]
    pub duration_unit: String,
    #[schema(example = "2025-03-10")]
    pub start_date: NaiveDate,
    #[schema(example = "2025-03-14")]
    pub end_date: NaiveDate,
    pub address_during_leave: String,
    pub phone_number: String,
    pub supervisor_name: String,
    pub supervisor_nip: String,
    pub official_name: String,
    pub official_nip: String,
    /// Newline-delimited; only the first two lines appear on the form.
    pub leave_notes: String,
    pub remaining_n2: i32,
    pub remaining_n1: i32,
    pub remaining_n: i32,
    pub created_at: Option<DateTime<Utc>>,
}

/// Leave request joined with its employee, the shape the renderer and the
/// history listing consume.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct LeaveRequestWithEmployee {
    #[serde(flatten)]
    pub request: LeaveRequest,
    pub employee: Employee,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLeaveRequestRequest {
    pub employee_id: i32,
    pub letter_date: NaiveDate,
    pub leave_type: String,
    pub reason: String,
    pub duration: i32,
    pub duration_unit: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub address_during_leave: String,
    pub phone_number: String,
    pub supervisor_name: String,
    pub supervisor_nip: String,
    pub official_name: String,
    pub official_nip: String,
    #[serde(default)]
    pub leave_notes: String,
    #[serde(default)]
    pub remaining_n2: i32,
    #[serde(default)]
    pub remaining_n1: i32,
    #[serde(default = "default_remaining_n")]
    pub remaining_n: i32,
}

/// Full-replace update; the owning employee is never reassigned.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateLeaveRequestRequest {
    pub letter_date: NaiveDate,
    pub leave_type: String,
    pub reason: String,
    pub duration: i32,
    pub duration_unit: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub address_during_leave: String,
    pub phone_number: String,
    pub supervisor_name: String,
    pub supervisor_nip: String,
    pub official_name: String,
    pub official_nip: String,
    #[serde(default)]
    pub leave_notes: String,
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

impl From<LeaveRequestWithEmployee> for crate::surat::SuratCutiData {
    fn from(record: LeaveRequestWithEmployee) -> Self {
        let LeaveRequestWithEmployee { request, employee } = record;
        Self {
            pegawai: crate::surat::PegawaiData {
                name: employee.name,
                nip: employee.nip,
                position: employee.position,
                years_of_service: employee.years_of_service,
                work_unit: employee.work_unit,
            },
            letter_date: request.letter_date,
            leave_type: request.leave_type,
            reason: request.reason,
            duration: request.duration,
            duration_unit: request.duration_unit,
            start_date: request.start_date,
            end_date: request.end_date,
            address_during_leave: request.address_during_leave,
            phone_number: request.phone_number,
            supervisor_name: request.supervisor_name,
            supervisor_nip: request.supervisor_nip,
            official_name: request.official_name,
            official_nip: request.official_nip,
            leave_notes: request.leave_notes,
            remaining_n2: request.remaining_n2,
            remaining_n1: request.remaining_n1,
            remaining_n: request.remaining_n,
        }
    }
}

fn validate_common(
    leave_type: &str,
    reason: &str,
    duration: i32,
    duration_unit: &str,
    address: &str,
    phone: &str,
    supervisor_name: &str,
    supervisor_nip: &str,
    official_name: &str,
    official_nip: &str,
) -> Result<(), String> {
    let mut errors = ValidationErrors::new();

    validate_jenis_cuti(leave_type, "leave_type", &mut errors);
    validate_required(reason, "reason", "Alasan Cuti", &mut errors);
    validate_durasi(duration, "duration", &mut errors);
    validate_satuan_cuti(duration_unit, "duration_unit", &mut errors);
    validate_required(
        address,
        "address_during_leave",
        "Alamat Selama Cuti",
        &mut errors,
    );
    validate_phone(phone, "phone_number", &mut errors);
    validate_required(
        supervisor_name,
        "supervisor_name",
        "Nama Atasan Langsung",
        &mut errors,
    );
    validate_required(
        supervisor_nip,
        "supervisor_nip",
        "NIP Atasan Langsung",
        &mut errors,
    );
    validate_required(
        official_name,
        "official_name",
        "Nama Pejabat Berwenang",
        &mut errors,
    );
    validate_required(
        official_nip,
        "official_nip",
        "NIP Pejabat Berwenang",
        &mut errors,
    );

    errors.into_result()
}

impl Validator for CreateLeaveRequestRequest {
    fn validate(&self) -> Result<(), String> {
        validate_common(
            &self.leave_type,
            &self.reason,
            self.duration,
            &self.duration_unit,
            &self.address_during_leave,
            &self.phone_number,
            &self.supervisor_name,
            &self.supervisor_nip,
            &self.official_name,
            &self.official_nip,
        )
    }
}

impl Validator for UpdateLeaveRequestRequest {
    fn validate(&self) -> Result<(), String> {
        validate_common(
            &self.leave_type,
            &self.reason,
            self.duration,
            &self.duration_unit,
            &self.address_during_leave,
            &self.phone_number,
            &self.supervisor_name,
            &self.supervisor_nip,
            &self.official_name,
            &self.official_nip,
        )
    }
}
