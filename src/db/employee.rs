//! Employee database operations

use super::AppState;
use crate::employee::models::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};

const COLUMNS: &str = "id, name, nip, position, years_of_service, work_unit, \
remaining_n2, remaining_n1, remaining_n, created_at, updated_at";

impl AppState {
    pub async fn get_all_employees(&self) -> Result<Vec<Employee>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM employees ORDER BY created_at DESC");
        sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn get_employee_by_id(&self, id: i32) -> Result<Option<Employee>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Search by name or NIP fragment, capped at 10 rows.
    pub async fn search_employees(&self, query: &str) -> Result<Vec<Employee>, sqlx::Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM employees \
             WHERE name ILIKE $1 OR nip ILIKE $1 ORDER BY name LIMIT 10"
        );
        sqlx::query_as::<_, Employee>(&sql)
            .bind(format!("%{}%", query))
            .fetch_all(&self.pool)
            .await
    }

    pub async fn create_employee(
        &self,
        req: &CreateEmployeeRequest,
    ) -> Result<Employee, sqlx::Error> {
        let sql = format!(
            "INSERT INTO employees \
             (name, nip, position, years_of_service, work_unit, remaining_n2, remaining_n1, remaining_n) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&sql)
            .bind(&req.name)
            .bind(&req.nip)
            .bind(&req.position)
            .bind(&req.years_of_service)
            .bind(&req.work_unit)
            .bind(req.remaining_n2)
            .bind(req.remaining_n1)
            .bind(req.remaining_n)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn update_employee(
        &self,
        id: i32,
        req: &UpdateEmployeeRequest,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let sql = format!(
            "UPDATE employees SET name = $1, nip = $2, position = $3, years_of_service = $4, \
             work_unit = $5, remaining_n2 = $6, remaining_n1 = $7, remaining_n = $8, \
             updated_at = NOW() WHERE id = $9 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&sql)
            .bind(&req.name)
            .bind(&req.nip)
            .bind(&req.position)
            .bind(&req.years_of_service)
            .bind(&req.work_unit)
            .bind(req.remaining_n2)
            .bind(req.remaining_n1)
            .bind(req.remaining_n)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn delete_employee(&self, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
