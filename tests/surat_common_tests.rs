use chrono::NaiveDate;
use lapas_cuti_server::surat::common::{
    escape_typst_string, format_tanggal, pdf_filename, sanitize_filename,
};

#[test]
fn test_escape_typst_string() {
    assert_eq!(
        escape_typst_string(r#"Hello "World""#),
        r#"Hello \"World\""#
    );
    assert_eq!(escape_typst_string("Line1\nLine2"), r"Line1\nLine2");
    assert_eq!(escape_typst_string(r"back\slash"), r"back\\slash");
}

#[test]
fn test_sanitize_filename() {
    assert_eq!(sanitize_filename("Budi Santoso", "fallback"), "budi-santoso");
    assert_eq!(sanitize_filename("  Spaces  ", "fallback"), "spaces");
    assert_eq!(sanitize_filename("", "fallback"), "fallback");
    assert_eq!(sanitize_filename("Test--Name", "fb"), "test-name");
}

#[test]
fn test_format_tanggal() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    assert_eq!(format_tanggal(date), "10 Maret 2025");

    let date = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
    assert_eq!(format_tanggal(date), "7 Januari 2026");

    let date = NaiveDate::from_ymd_opt(2024, 8, 17).unwrap();
    assert_eq!(format_tanggal(date), "17 Agustus 2024");
}

#[test]
fn test_pdf_filename_format() {
    let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    assert_eq!(
        pdf_filename("budi santoso", today),
        "Surat_Cuti_budi_santoso_2025-03-10.pdf"
    );
}

#[test]
fn test_pdf_filename_collapses_whitespace_runs() {
    let today = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
    assert_eq!(
        pdf_filename("Siti  Nur\tAminah", today),
        "Surat_Cuti_Siti_Nur_Aminah_2025-12-31.pdf"
    );
}
