use lapas_cuti_server::surat::validation::{
    validate_durasi, validate_jenis_cuti, validate_nip, validate_phone, validate_required,
    validate_satuan_cuti, ValidationErrors,
};

#[test]
fn test_validate_required_rejects_blank() {
    let mut errors = ValidationErrors::new();
    validate_required("  ", "reason", "Alasan Cuti", &mut errors);
    assert_eq!(errors.len(), 1);
    assert!(errors.to_message().contains("Alasan Cuti"));
}

#[test]
fn test_validate_required_accepts_text() {
    let mut errors = ValidationErrors::new();
    validate_required("Keperluan keluarga", "reason", "Alasan Cuti", &mut errors);
    assert!(errors.is_empty());
}

#[test]
fn test_validate_nip_requires_18_digits() {
    let mut errors = ValidationErrors::new();
    validate_nip("198501012010121001", "nip", &mut errors);
    assert!(errors.is_empty());

    let mut errors = ValidationErrors::new();
    validate_nip("12345", "nip", &mut errors);
    assert_eq!(errors.len(), 1);

    let mut errors = ValidationErrors::new();
    validate_nip("19850101201012100X", "nip", &mut errors);
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_validate_phone_length_bounds() {
    let mut errors = ValidationErrors::new();
    validate_phone("08123456789", "phone_number", &mut errors);
    assert!(errors.is_empty());

    let mut errors = ValidationErrors::new();
    validate_phone("0812-3456-789", "phone_number", &mut errors);
    assert!(errors.is_empty(), "separators should be ignored");

    let mut errors = ValidationErrors::new();
    validate_phone("12345", "phone_number", &mut errors);
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_validate_jenis_cuti_membership() {
    let mut errors = ValidationErrors::new();
    validate_jenis_cuti("Cuti Tahunan", "leave_type", &mut errors);
    validate_jenis_cuti("Cuti di Luar Tanggungan Negara", "leave_type", &mut errors);
    assert!(errors.is_empty());

    let mut errors = ValidationErrors::new();
    validate_jenis_cuti("Cuti Panjang", "leave_type", &mut errors);
    assert_eq!(errors.len(), 1);
    assert!(errors.to_message().contains("Cuti Panjang"));
}

#[test]
fn test_validate_satuan_cuti_membership() {
    let mut errors = ValidationErrors::new();
    validate_satuan_cuti("Hari", "duration_unit", &mut errors);
    validate_satuan_cuti("Bulan", "duration_unit", &mut errors);
    validate_satuan_cuti("Tahun", "duration_unit", &mut errors);
    assert!(errors.is_empty());

    let mut errors = ValidationErrors::new();
    validate_satuan_cuti("Minggu", "duration_unit", &mut errors);
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_validate_durasi_positive() {
    let mut errors = ValidationErrors::new();
    validate_durasi(5, "duration", &mut errors);
    assert!(errors.is_empty());

    let mut errors = ValidationErrors::new();
    validate_durasi(0, "duration", &mut errors);
    assert_eq!(errors.len(), 1);

    let mut errors = ValidationErrors::new();
    validate_durasi(-3, "duration", &mut errors);
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_errors_accumulate_and_number_messages() {
    let mut errors = ValidationErrors::new();
    validate_required("", "reason", "Alasan Cuti", &mut errors);
    validate_durasi(0, "duration", &mut errors);
    validate_satuan_cuti("Minggu", "duration_unit", &mut errors);

    assert_eq!(errors.len(), 3);
    let message = errors.to_message();
    assert!(message.contains("3 kesalahan"));
    assert!(message.contains("1. "));
    assert!(message.contains("3. "));

    let result = errors.into_result();
    assert!(result.is_err());
}
