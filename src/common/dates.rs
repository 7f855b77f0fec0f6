// src/common/dates.rs

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};

use crate::common::error::AppError;

/// Idade em anos completos na data `today`.
pub fn age(birth: NaiveDate, today: NaiveDate) -> u32 {
    if today < birth {
        return 0;
    }
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Tempo de casa decomposto em anos, meses e dias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tenure {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

pub fn tenure(admission: NaiveDate, today: NaiveDate) -> Tenure {
    if today <= admission {
        return Tenure::default();
    }

    let shifted = |months: i32| admission.checked_add_months(Months::new(months as u32));

    // Maior número de meses cheios que cabe até `today` (fim de mês é ajustado pelo chrono)
    let mut months = (today.year() - admission.year()) * 12 + today.month() as i32
        - admission.month() as i32;
    while months > 0 && shifted(months).is_none_or(|date| date > today) {
        months -= 1;
    }

    let anchor = shifted(months).unwrap_or(admission);
    let days = (today - anchor).num_days().max(0);

    Tenure {
        years: (months / 12) as u32,
        months: (months % 12) as u32,
        days: days as u32,
    }
}

impl fmt::Display for Tenure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.years > 0 {
            parts.push(plural(self.years, "ano", "anos"));
        }
        if self.months > 0 {
            parts.push(plural(self.months, "mês", "meses"));
        }
        if self.days > 0 || parts.is_empty() {
            parts.push(plural(self.days, "dia", "dias"));
        }

        match parts.len() {
            1 => write!(f, "{}", parts[0]),
            _ => {
                let last = parts.pop().unwrap_or_default();
                write!(f, "{} e {}", parts.join(", "), last)
            }
        }
    }
}

fn plural(n: u32, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, plural)
    }
}

pub fn is_birthday_month(birth: NaiveDate, month: u32) -> bool {
    birth.month() == month
}

/// Número de dias entre `start` e `end`, contando os dois extremos.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> Result<i64, AppError> {
    if end < start {
        return Err(AppError::InvalidDateRange(
            "A data final não pode ser anterior à data inicial.".to_string(),
        ));
    }
    Ok((end - start).num_days() + 1)
}

/// Aceita `AAAA-MM-DD` ou `DD/MM/AAAA`.
pub fn parse_date(input: &str) -> Result<NaiveDate, AppError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, "%d/%m/%Y"))
        .map_err(|_| AppError::InvalidDate(format!("'{}' não é uma data válida.", input)))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto", "Setembro",
    "Outubro", "Novembro", "Dezembro",
];

pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn age_counts_only_completed_years() {
        assert_eq!(age(d(1990, 6, 15), d(2024, 6, 14)), 33);
        assert_eq!(age(d(1990, 6, 15), d(2024, 6, 15)), 34);
        assert_eq!(age(d(2000, 2, 29), d(2021, 2, 28)), 20);
        assert_eq!(age(d(2030, 1, 1), d(2024, 1, 1)), 0);
    }

    #[test]
    fn tenure_counts_whole_months_before_days() {
        let t = tenure(d(2020, 1, 31), d(2020, 3, 1));
        assert_eq!(t, Tenure { years: 0, months: 1, days: 1 });

        let t = tenure(d(2019, 11, 20), d(2022, 2, 10));
        assert_eq!(t, Tenure { years: 2, months: 2, days: 21 });
    }

    #[test]
    fn future_admission_is_zero_tenure() {
        assert_eq!(tenure(d(2025, 1, 1), d(2024, 1, 1)), Tenure::default());
    }

    #[test]
    fn tenure_display_in_portuguese() {
        let t = Tenure { years: 2, months: 3, days: 4 };
        assert_eq!(t.to_string(), "2 anos, 3 meses e 4 dias");
        let t = Tenure { years: 1, months: 0, days: 0 };
        assert_eq!(t.to_string(), "1 ano");
        let t = Tenure { years: 0, months: 1, days: 1 };
        assert_eq!(t.to_string(), "1 mês e 1 dia");
        assert_eq!(Tenure::default().to_string(), "0 dias");
    }

    #[test]
    fn inclusive_days_counts_both_ends() {
        assert_eq!(inclusive_days(d(2024, 3, 1), d(2024, 3, 1)).unwrap(), 1);
        assert_eq!(inclusive_days(d(2024, 2, 28), d(2024, 3, 1)).unwrap(), 3);
        assert!(inclusive_days(d(2024, 3, 2), d(2024, 3, 1)).is_err());
    }

    #[test]
    fn parses_iso_and_brazilian_formats() {
        assert_eq!(parse_date("2024-05-07").unwrap(), d(2024, 5, 7));
        assert_eq!(parse_date("07/05/2024").unwrap(), d(2024, 5, 7));
        assert!(parse_date("31/02/2024").is_err());
        assert_eq!(format_date(d(2024, 5, 7)), "07/05/2024");
    }

    #[test]
    fn month_names_are_one_based() {
        assert_eq!(month_name(1), Some("Janeiro"));
        assert_eq!(month_name(12), Some("Dezembro"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }
}
