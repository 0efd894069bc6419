#[cfg(test)]
mod api_integration_tests {
    use chrono::NaiveDate;
    use lapas_cuti_server::surat::common::pdf_filename;
    use lapas_cuti_server::ErrorResponse;

    #[test]
    fn test_error_response_consistency() {
        // Not-found shape used by the retrieval endpoints
        let request_error = ErrorResponse::not_found("Leave request not found");
        assert_eq!(request_error.error, "NotFound");

        // Bad-request shape used by the validation boundary
        let validation_error = ErrorResponse::bad_request("Invalid input");
        assert_eq!(validation_error.error, "BadRequest");
    }

    #[test]
    fn test_content_disposition_filename_shape() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let filename = pdf_filename("Budi Santoso", today);

        assert!(filename.starts_with("Surat_Cuti_"));
        assert!(filename.ends_with(".pdf"));
        assert!(!filename.contains(' '));
        assert_eq!(filename, "Surat_Cuti_Budi_Santoso_2025-03-10.pdf");

        let header_value = format!("inline; filename=\"{}\"", filename);
        assert_eq!(
            header_value,
            "inline; filename=\"Surat_Cuti_Budi_Santoso_2025-03-10.pdf\""
        );
    }

    #[test]
    fn test_error_response_serialization() {
        let not_found_error = ErrorResponse::not_found("Resource not found");
        let internal_error = ErrorResponse::internal_error("Server error");

        let not_found_json = serde_json::to_string(&not_found_error);
        assert!(not_found_json.is_ok());

        let internal_json = serde_json::to_string(&internal_error);
        assert!(internal_json.is_ok());

        let deserialized: Result<ErrorResponse, _> =
            serde_json::from_str(&not_found_json.unwrap());
        assert!(deserialized.is_ok());
    }
}
