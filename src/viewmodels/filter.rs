// src/viewmodels/filter.rs
//
// Filtros da listagem. Cada faceta é independente; faceta vazia não restringe
// nada e o resultado é a interseção de todas.

use chrono::{Datelike, NaiveDate};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::models::{
    employee::{Employee, Sex},
    notification::{Notification, NotificationKind},
};

/// Minúsculas e sem acentos, para comparar "joão" com "Joao".
pub fn fold(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

// `Some("")` vindo de um campo apagado não restringe nada
fn facet(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn same_text(a: &str, b: &str) -> bool {
    fold(a.trim()) == fold(b.trim())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub name: String,
    pub sex: Option<Sex>,
    pub sector: Option<String>,
    pub role: Option<String>,
    pub level: Option<String>,
    pub birth_month: Option<u32>,
}

impl EmployeeFilter {
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.sex.is_none()
            && facet(&self.sector).is_none()
            && facet(&self.role).is_none()
            && facet(&self.level).is_none()
            && self.birth_month.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        let name = fold(self.name.trim());
        if !name.is_empty() && !fold(&employee.name).contains(&name) {
            return false;
        }
        if self.sex.is_some_and(|sex| sex != employee.sex) {
            return false;
        }
        if let Some(sector) = facet(&self.sector) {
            if !same_text(sector, &employee.sector) {
                return false;
            }
        }
        if let Some(role) = facet(&self.role) {
            if !same_text(role, &employee.role) {
                return false;
            }
        }
        if let Some(level) = facet(&self.level) {
            match &employee.level {
                Some(employee_level) if same_text(level, employee_level) => {}
                _ => return false,
            }
        }
        if let Some(month) = self.birth_month {
            if employee.birth_date.month() != month {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, employees: &'a [Employee]) -> Vec<&'a Employee> {
        employees.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Valores distintos de uma faceta, para montar as opções do dropdown.
pub fn facet_options<F>(employees: &[Employee], value: F) -> Vec<String>
where
    F: Fn(&Employee) -> Option<&str>,
{
    let mut options: Vec<String> = Vec::new();
    for employee in employees {
        if let Some(v) = value(employee).map(str::trim).filter(|v| !v.is_empty()) {
            if !options.iter().any(|o| same_text(o, v)) {
                options.push(v.to_string());
            }
        }
    }
    options.sort_by_key(|o| fold(o));
    options
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationFilter {
    pub kind: Option<NotificationKind>,
    pub from: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

impl NotificationFilter {
    /// Um registro entra se o seu período cruza a janela `from..=until`.
    pub fn matches(&self, notification: &Notification) -> bool {
        if self.kind.is_some_and(|kind| kind != notification.kind) {
            return false;
        }
        if self.from.is_some_and(|from| notification.last_day() < from) {
            return false;
        }
        if self.until.is_some_and(|until| notification.start_date > until) {
            return false;
        }
        true
    }

    pub fn apply<'a>(&self, notifications: &'a [Notification]) -> Vec<&'a Notification> {
        notifications.iter().filter(|n| self.matches(n)).collect()
    }
}
