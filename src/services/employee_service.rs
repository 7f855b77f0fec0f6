// src/services/employee_service.rs

use chrono::{Datelike, NaiveDate};
use validator::Validate;

use crate::{
    api::EmployeeRepository,
    common::{
        dates::{self, Tenure},
        error::AppError,
    },
    models::employee::{Employee, EmployeePayload},
    services::upload::UploadLimits,
};

/// Dados calculados exibidos na ficha do funcionário.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeProfile {
    pub age: u32,
    pub tenure: Tenure,
}

pub fn profile(employee: &Employee, today: NaiveDate) -> EmployeeProfile {
    EmployeeProfile {
        age: dates::age(employee.birth_date, today),
        tenure: dates::tenure(employee.admission_date, today),
    }
}

/// Aniversariantes do mês, em ordem de dia.
pub fn birthdays_in_month(employees: &[Employee], month: u32) -> Vec<&Employee> {
    let mut result: Vec<&Employee> = employees
        .iter()
        .filter(|e| dates::is_birthday_month(e.birth_date, month))
        .collect();
    result.sort_by(|a, b| {
        a.birth_date
            .day()
            .cmp(&b.birth_date.day())
            .then_with(|| a.name.cmp(&b.name))
    });
    result
}

#[derive(Clone)]
pub struct EmployeeService {
    repo: EmployeeRepository,
    limits: UploadLimits,
}

impl EmployeeService {
    pub fn new(repo: EmployeeRepository, limits: UploadLimits) -> Self {
        Self { repo, limits }
    }

    pub async fn list(&self, company_id: i64) -> Result<Vec<Employee>, AppError> {
        let mut employees = self.repo.list_by_company(company_id).await?;
        employees.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(employees)
    }

    pub async fn get(&self, id: i64) -> Result<Employee, AppError> {
        self.repo.find_by_id(id).await
    }

    pub async fn create(&self, payload: &EmployeePayload) -> Result<Employee, AppError> {
        validate_employee(payload)?;
        let employee = self.repo.create(payload).await?;
        tracing::info!("👤 Funcionário '{}' cadastrado (id {})", employee.name, employee.id);
        Ok(employee)
    }

    pub async fn update(&self, id: i64, payload: &EmployeePayload) -> Result<Employee, AppError> {
        validate_employee(payload)?;
        self.repo.update(id, payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repo.delete(id).await?;
        tracing::info!("Funcionário {} removido", id);
        Ok(())
    }

    /// Envia a foto e devolve o caminho salvo no servidor.
    pub async fn upload_photo(
        &self,
        id: i64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        let upload = self.limits.image("foto", file_name, bytes)?;
        let response = self.repo.upload_photo(id, upload).await?;
        Ok(response.path)
    }
}

fn validate_employee(payload: &EmployeePayload) -> Result<(), AppError> {
    payload.validate()?;
    if payload.admission_date < payload.birth_date {
        return Err(AppError::InvalidDateRange(
            "A data de admissão não pode ser anterior ao nascimento.".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::Sex;

    fn employee(id: i64, name: &str, birth: (i32, u32, u32)) -> Employee {
        Employee {
            id,
            company_id: 1,
            name: name.to_string(),
            document_id: "12345678909".to_string(),
            phone: None,
            sex: Sex::Female,
            birth_date: NaiveDate::from_ymd_opt(birth.0, birth.1, birth.2).unwrap(),
            admission_date: NaiveDate::from_ymd_opt(2015, 3, 10).unwrap(),
            sector: "RH".to_string(),
            role: "Analista".to_string(),
            level: None,
            salary: None,
            photo: None,
        }
    }

    #[test]
    fn birthdays_sorted_by_day() {
        let list = vec![
            employee(1, "Carla", (1990, 5, 20)),
            employee(2, "Bruna", (1985, 4, 2)),
            employee(3, "Ana", (1999, 5, 3)),
        ];
        let may: Vec<i64> = birthdays_in_month(&list, 5).iter().map(|e| e.id).collect();
        assert_eq!(may, vec![3, 1]);
        assert!(birthdays_in_month(&list, 12).is_empty());
    }

    #[test]
    fn profile_combines_age_and_tenure() {
        let e = employee(1, "Ana", (1990, 3, 15));
        let p = profile(&e, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
        assert_eq!(p.age, 33);
        assert_eq!(
            p.tenure,
            Tenure {
                years: 9,
                months: 0,
                days: 4
            }
        );
    }

    #[test]
    fn admission_before_birth_is_rejected() {
        let mut payload = EmployeePayload::from(&employee(1, "Ana", (1990, 3, 15)));
        payload.admission_date = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
        assert!(matches!(
            validate_employee(&payload),
            Err(AppError::InvalidDateRange(_))
        ));
    }

    #[test]
    fn missing_required_fields_block_submission() {
        let mut payload = EmployeePayload::from(&employee(1, "Ana", (1990, 3, 15)));
        payload.name.clear();
        payload.sector = "  ".to_string();
        match validate_employee(&payload) {
            Err(AppError::ValidationError(errors)) => {
                let fields = errors.field_errors();
                assert!(fields.contains_key("name"));
                assert!(fields.contains_key("sector"));
            }
            other => panic!("esperava erro de validação, veio {:?}", other),
        }
    }
}
