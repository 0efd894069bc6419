#[cfg(test)]
mod model_tests {
    use chrono::NaiveDate;
    use lapas_cuti_server::auth::model::{User, UserInfo};
    use lapas_cuti_server::employee::models::Employee;
    use lapas_cuti_server::leave_request::models::{LeaveRequest, LeaveRequestWithEmployee};
    use lapas_cuti_server::ErrorResponse;

    fn employee() -> Employee {
        Employee {
            id: 1,
            name: "Budi Santoso".to_string(),
            nip: "198501012010121001".to_string(),
            position: "Penjaga Tahanan".to_string(),
            years_of_service: "7 Tahun".to_string(),
            work_unit: "Lapas Kelas IIB Gunung Sugih".to_string(),
            remaining_n2: 3,
            remaining_n1: 6,
            remaining_n: 9,
            created_at: None,
            updated_at: None,
        }
    }

    fn leave_request() -> LeaveRequest {
        LeaveRequest {
            id: 10,
            employee_id: 1,
            letter_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            leave_type: "Cuti Tahunan".to_string(),
            reason: "Keperluan keluarga".to_string(),
            duration: 3,
            duration_unit: "Hari".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
            address_during_leave: "Jl. Melati No. 5".to_string(),
            phone_number: "08123456789".to_string(),
            supervisor_name: "Agus Wijaya".to_string(),
            supervisor_nip: "197803052005011002".to_string(),
            official_name: "Hendra Kusuma".to_string(),
            official_nip: "196905121995031001".to_string(),
            leave_notes: String::new(),
            remaining_n2: 3,
            remaining_n1: 6,
            remaining_n: 9,
            created_at: None,
        }
    }

    #[test]
    fn test_employee_serialization_roundtrip() {
        let original = employee();

        let json = serde_json::to_string(&original).unwrap();
        let parsed: Employee = serde_json::from_str(&json).unwrap();

        assert_eq!(original.id, parsed.id);
        assert_eq!(original.name, parsed.name);
        assert_eq!(original.nip, parsed.nip);
        assert_eq!(original.remaining_n, parsed.remaining_n);
    }

    #[test]
    fn test_leave_request_dates_serialize_as_iso() {
        let json = serde_json::to_value(leave_request()).unwrap();

        assert_eq!(json["letter_date"], "2025-03-03");
        assert_eq!(json["start_date"], "2025-03-10");
        assert_eq!(json["end_date"], "2025-03-12");
    }

    #[test]
    fn test_joined_record_flattens_request_fields() {
        let record = LeaveRequestWithEmployee {
            request: leave_request(),
            employee: employee(),
        };

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], 10);
        assert_eq!(json["leave_type"], "Cuti Tahunan");
        assert_eq!(json["employee"]["id"], 1);
        assert_eq!(json["employee"]["work_unit"], "Lapas Kelas IIB Gunung Sugih");
    }

    #[test]
    fn test_user_info_hides_sensitive_fields() {
        let user = User {
            id: 1,
            email: "admin@lapas.go.id".to_string(),
            name: "Administrator".to_string(),
            password_hash: "secret-hash".to_string(),
            refresh_token: Some("refresh-token".to_string()),
            created_at: None,
            updated_at: None,
        };

        let info = UserInfo::from(user);
        let json = serde_json::to_string(&info).unwrap();

        assert!(json.contains("admin@lapas.go.id"));
        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("refresh-token"));
    }

    #[test]
    fn test_error_response_constructors() {
        let not_found = ErrorResponse::not_found("Leave request not found");
        assert_eq!(not_found.error, "NotFound");
        assert_eq!(not_found.message, "Leave request not found");
        assert!(!not_found.timestamp.is_empty());

        let bad_request = ErrorResponse::bad_request("Invalid input");
        assert_eq!(bad_request.error, "BadRequest");

        let internal = ErrorResponse::internal_error("Rendering failed");
        assert_eq!(internal.error, "InternalServerError");
    }
}
