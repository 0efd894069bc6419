#[cfg(test)]
mod tests {
    use crate::employee::models::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};
    use crate::surat::Validator;

    #[test]
    fn test_employee_serialization_roundtrip() {
        let employee = Employee {
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
        };

        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();

        assert_eq!(employee.id, deserialized.id);
        assert_eq!(employee.nip, deserialized.nip);
        assert_eq!(employee.work_unit, deserialized.work_unit);
    }

    #[test]
    fn test_create_request_balance_defaults() {
        let json = r#"{
            "name": "Siti Aminah",
            "nip": "199002022015032002",
            "position": "Staf Tata Usaha",
            "years_of_service": "5 Tahun",
            "work_unit": "Lapas Kelas IIB Gunung Sugih"
        }"#;

        let request: CreateEmployeeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.remaining_n2, 0);
        assert_eq!(request.remaining_n1, 0);
        assert_eq!(request.remaining_n, 12);
    }

    #[test]
    fn test_create_request_valid() {
        let request = CreateEmployeeRequest {
            name: "Budi Santoso".to_string(),
            nip: "198501012010121001".to_string(),
            position: "Penjaga Tahanan".to_string(),
            years_of_service: "7 Tahun".to_string(),
            work_unit: "Lapas Kelas IIB Gunung Sugih".to_string(),
            remaining_n2: 0,
            remaining_n1: 0,
            remaining_n: 12,
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_short_nip() {
        let request = CreateEmployeeRequest {
            name: "Budi Santoso".to_string(),
            nip: "12345".to_string(),
            position: "Penjaga Tahanan".to_string(),
            years_of_service: "7 Tahun".to_string(),
            work_unit: "Lapas Kelas IIB Gunung Sugih".to_string(),
            remaining_n2: 0,
            remaining_n1: 0,
            remaining_n: 12,
        };

        let err = request.validate().unwrap_err();
        assert!(err.contains("NIP"));
    }

    #[test]
    fn test_update_request_rejects_empty_name() {
        let request = UpdateEmployeeRequest {
            name: "  ".to_string(),
            nip: "198501012010121001".to_string(),
            position: "Penjaga Tahanan".to_string(),
            years_of_service: "7 Tahun".to_string(),
            work_unit: "Lapas Kelas IIB Gunung Sugih".to_string(),
            remaining_n2: 0,
            remaining_n1: 0,
            remaining_n: 12,
        };

        let err = request.validate().unwrap_err();
        assert!(err.contains("Nama Pegawai"));
    }
}
