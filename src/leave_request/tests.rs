#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::employee::models::Employee;
    use crate::leave_request::models::{
        CreateLeaveRequestRequest, LeaveRequest, LeaveRequestWithEmployee,
    };
    use crate::surat::{SuratCutiData, Validator};

    fn sample_employee() -> Employee {
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

    fn sample_request() -> LeaveRequest {
        LeaveRequest {
            id: 10,
            employee_id: 1,
            letter_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            leave_type: "Cuti Sakit".to_string(),
            reason: "Pemulihan pasca operasi".to_string(),
            duration: 5,
            duration_unit: "Hari".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            address_during_leave: "Jl. Melati No. 5, Metro".to_string(),
            phone_number: "08123456789".to_string(),
            supervisor_name: "Agus Wijaya".to_string(),
            supervisor_nip: "197803052005011002".to_string(),
            official_name: "Hendra Kusuma".to_string(),
            official_nip: "196905121995031001".to_string(),
            leave_notes: "Sisa 9 hari\nDisetujui".to_string(),
            remaining_n2: 3,
            remaining_n1: 6,
            remaining_n: 9,
            created_at: None,
        }
    }

    #[test]
    fn test_joined_record_serializes_with_embedded_employee() {
        let record = LeaveRequestWithEmployee {
            request: sample_request(),
            employee: sample_employee(),
        };

        let json = serde_json::to_value(&record).unwrap();
        // Request fields are flattened to the top level, employee is nested.
        assert_eq!(json["leave_type"], "Cuti Sakit");
        assert_eq!(json["employee"]["nip"], "198501012010121001");
    }

    #[test]
    fn test_surat_data_conversion_snapshots_request_balances() {
        let mut employee = sample_employee();
        // Live counters may have moved on since the request was filed.
        employee.remaining_n = 4;

        let record = LeaveRequestWithEmployee {
            request: sample_request(),
            employee,
        };

        let data = SuratCutiData::from(record);
        assert_eq!(data.remaining_n, 9);
        assert_eq!(data.pegawai.name, "Budi Santoso");
        assert_eq!(data.leave_type, "Cuti Sakit");
    }

    #[test]
    fn test_create_request_deserialization_defaults() {
        let json = r#"{
            "employee_id": 1,
            "letter_date": "2025-03-03",
            "leave_type": "Cuti Tahunan",
            "reason": "Keperluan keluarga",
            "duration": 3,
            "duration_unit": "Hari",
            "start_date": "2025-03-10",
            "end_date": "2025-03-12",
            "address_during_leave": "Jl. Melati No. 5",
            "phone_number": "08123456789",
            "supervisor_name": "Agus Wijaya",
            "supervisor_nip": "197803052005011002",
            "official_name": "Hendra Kusuma",
            "official_nip": "196905121995031001"
        }"#;

        let request: CreateLeaveRequestRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.leave_notes, "");
        assert_eq!(request.remaining_n2, 0);
        assert_eq!(request.remaining_n1, 0);
        assert_eq!(request.remaining_n, 12);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_unknown_leave_type() {
        let mut request: CreateLeaveRequestRequest = serde_json::from_str(
            r#"{
            "employee_id": 1,
            "letter_date": "2025-03-03",
            "leave_type": "Cuti Tahunan",
            "reason": "Keperluan keluarga",
            "duration": 3,
            "duration_unit": "Hari",
            "start_date": "2025-03-10",
            "end_date": "2025-03-12",
            "address_during_leave": "Jl. Melati No. 5",
            "phone_number": "08123456789",
            "supervisor_name": "Agus Wijaya",
            "supervisor_nip": "197803052005011002",
            "official_name": "Hendra Kusuma",
            "official_nip": "196905121995031001"
        }"#,
        )
        .unwrap();

        request.leave_type = "Cuti Panjang".to_string();
        let err = request.validate().unwrap_err();
        assert!(err.contains("Cuti Panjang"));

        request.leave_type = "Cuti Tahunan".to_string();
        request.duration = 0;
        let err = request.validate().unwrap_err();
        assert!(err.contains("Lama cuti"));
    }
}
