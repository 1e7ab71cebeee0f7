use crate::error::SelectionError;
use crate::forms::toggle;
use crate::vocab::PacketCategory;
use chrono::{Datelike, NaiveDate};
use std::ops::Deref;
use std::rc::Rc;

/// Period and packet-type filter shared by every analysis view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    categories: Vec<PacketCategory>,
    month: Option<u32>,
    year: Option<i32>,
}

impl Selection {
    pub fn categories(&self) -> &[PacketCategory] {
        &self.categories
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn contains(&self, category: PacketCategory) -> bool {
        self.categories.contains(&category)
    }

    /// Adds the category at the end, or removes it if already selected.
    pub fn toggle_category(&mut self, category: PacketCategory) {
        toggle(&mut self.categories, category);
    }

    pub fn set_month(&mut self, month: Option<u32>) -> Result<(), SelectionError> {
        if let Some(m) = month {
            if !(1..=12).contains(&m) {
                return Err(SelectionError::InvalidMonth(m.to_string()));
            }
        }
        self.month = month;
        Ok(())
    }

    pub fn set_year(&mut self, year: Option<i32>) -> Result<(), SelectionError> {
        if let Some(y) = year {
            if !(1970..=9999).contains(&y) {
                return Err(SelectionError::InvalidYear(y.to_string()));
            }
        }
        self.year = year;
        Ok(())
    }

    /// Applies the raw value of an `<input type="month">` (`YYYY-MM`).
    /// Only the month is kept; the year has its own picker.
    pub fn set_month_input(&mut self, raw: &str) -> Result<(), SelectionError> {
        let month = parse_month_input(raw)?;
        self.set_month(month)
    }

    pub fn set_year_input(&mut self, raw: &str) -> Result<(), SelectionError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return self.set_year(None);
        }
        let year = raw
            .parse::<i32>()
            .map_err(|_| SelectionError::InvalidYear(raw.to_string()))?;
        self.set_year(Some(year))
    }

    /// The analysis area only opens once at least one filter is chosen.
    pub fn is_active(&self) -> bool {
        !self.categories.is_empty() || self.month.is_some() || self.year.is_some()
    }

    pub fn period(&self) -> Option<(i32, u32)> {
        Some((self.year?, self.month?))
    }
}

pub fn parse_month_input(raw: &str) -> Result<Option<u32>, SelectionError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d")
        .map(|date| Some(date.month()))
        .map_err(|_| SelectionError::InvalidMonth(raw.to_string()))
}

/// Read-only handle to a [`Selection`], handed to the analysis subtree by the
/// filter panel. Cloning shares the same snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionHandle(Rc<Selection>);

impl SelectionHandle {
    pub fn new(selection: Selection) -> Self {
        Self(Rc::new(selection))
    }

    /// Unwraps a context lookup. A missing provider is a wiring bug in the
    /// component tree, so there is no default to fall back to.
    pub fn require(found: Option<SelectionHandle>) -> Result<SelectionHandle, SelectionError> {
        found.ok_or(SelectionError::OutsideProvider)
    }
}

impl Deref for SelectionHandle {
    type Target = Selection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_keeps_insertion_order() {
        let mut sel = Selection::default();
        sel.toggle_category(PacketCategory::JoinRequest);
        sel.toggle_category(PacketCategory::Stat);
        sel.toggle_category(PacketCategory::ConfirmedDataUp);
        sel.toggle_category(PacketCategory::Stat);
        assert_eq!(
            sel.categories(),
            &[PacketCategory::JoinRequest, PacketCategory::ConfirmedDataUp]
        );
    }

    #[test]
    fn month_picker_value_is_one_based() {
        assert_eq!(parse_month_input("2024-03").unwrap(), Some(3));
        assert_eq!(parse_month_input("2023-12").unwrap(), Some(12));
        assert_eq!(parse_month_input("").unwrap(), None);
        assert!(parse_month_input("2024-13").is_err());
        assert!(parse_month_input("March").is_err());
    }

    #[test]
    fn out_of_range_values_are_rejected_and_state_kept() {
        let mut sel = Selection::default();
        sel.set_month(Some(4)).unwrap();
        assert!(sel.set_month(Some(0)).is_err());
        assert_eq!(sel.month(), Some(4));
        assert!(sel.set_year_input("20x4").is_err());
        assert_eq!(sel.year(), None);
        sel.set_year_input("2024").unwrap();
        assert_eq!(sel.year(), Some(2024));
        sel.set_year_input("").unwrap();
        assert_eq!(sel.year(), None);
    }

    #[test]
    fn any_filter_activates_the_analysis_area() {
        let mut sel = Selection::default();
        assert!(!sel.is_active());
        sel.set_year(Some(2025)).unwrap();
        assert!(sel.is_active());
        assert_eq!(sel.period(), None);
        sel.set_month(Some(1)).unwrap();
        assert_eq!(sel.period(), Some((2025, 1)));
    }

    #[test]
    fn missing_provider_is_an_error_not_a_default() {
        let err = SelectionHandle::require(None).unwrap_err();
        assert_eq!(err, SelectionError::OutsideProvider);
        assert!(err.to_string().contains("SelectionProvider"));

        let handle = SelectionHandle::new(Selection::default());
        let found = SelectionHandle::require(Some(handle.clone())).unwrap();
        assert_eq!(found, handle);
    }
}
