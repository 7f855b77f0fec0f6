// src/viewmodels/date_picker.rs

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::{
    common::dates::month_name,
    viewmodels::dropdown::{Dropdown, DropdownEvent, Rect},
};

/// Uma célula da grade do calendário.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    // Dias do mês anterior/seguinte aparecem esmaecidos
    pub in_month: bool,
    pub selected: bool,
}

/// Campo de data com calendário suspenso.
#[derive(Debug, Clone, PartialEq)]
pub struct DatePicker {
    dropdown: Dropdown,
    selected: Option<NaiveDate>,
    // Sempre o dia 1 do mês exibido
    visible_month: NaiveDate,
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

impl DatePicker {
    pub fn new(anchor: Rect, selected: Option<NaiveDate>, today: NaiveDate) -> Self {
        Self {
            // 7 colunas de 36px, cabeçalho + 6 semanas
            dropdown: Dropdown::new(anchor, 252.0, 280.0),
            selected,
            visible_month: first_of_month(selected.unwrap_or(today)),
        }
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.dropdown.is_open()
    }

    pub fn dropdown(&self) -> &Dropdown {
        &self.dropdown
    }

    pub fn handle(&mut self, event: DropdownEvent, viewport: (f32, f32)) -> bool {
        let was_open = self.dropdown.is_open();
        let open = self.dropdown.handle(event, viewport);
        // Ao abrir, mostra o mês da data escolhida
        if open && !was_open {
            if let Some(selected) = self.selected {
                self.visible_month = first_of_month(selected);
            }
        }
        open
    }

    pub fn visible_month(&self) -> NaiveDate {
        self.visible_month
    }

    /// "Março de 2024"
    pub fn title(&self) -> String {
        format!(
            "{} de {}",
            month_name(self.visible_month.month()).unwrap_or_default(),
            self.visible_month.year()
        )
    }

    pub fn next_month(&mut self) {
        if let Some(next) = self.visible_month.checked_add_months(Months::new(1)) {
            self.visible_month = next;
        }
    }

    pub fn previous_month(&mut self) {
        if let Some(previous) = self.visible_month.checked_sub_months(Months::new(1)) {
            self.visible_month = previous;
        }
    }

    /// Escolher um dia fecha o calendário.
    pub fn pick(&mut self, date: NaiveDate) {
        self.selected = Some(date);
        self.visible_month = first_of_month(date);
        self.dropdown.close();
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Grade fixa de 6 semanas x 7 dias, começando no domingo.
    pub fn grid(&self) -> Vec<[DayCell; 7]> {
        let offset = self.visible_month.weekday().num_days_from_sunday() as i64;
        let start = self.visible_month - Duration::days(offset);

        (0..6)
            .map(|week| {
                std::array::from_fn(|weekday| {
                    let date = start + Duration::days(week * 7 + weekday as i64);
                    DayCell {
                        date,
                        in_month: date.month() == self.visible_month.month(),
                        selected: self.selected == Some(date),
                    }
                })
            })
            .collect()
    }
}
