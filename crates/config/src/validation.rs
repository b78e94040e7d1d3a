//! Checking configuration sections

use std::fmt::Display;
use std::ops::RangeInclusive;

pub use crate::error::ValidationError;

/// A `[section]` of `config.toml`
pub trait ConfigSection: Default {
    /// Every problem in the section, or `Ok` when there are none
    fn validate(&self) -> Result<(), Vec<ValidationError>>;

    /// Takes every value from `other`
    fn merge(&mut self, other: Self);

    /// Table name in the TOML file
    fn section_name(&self) -> &'static str;
}

/// Collects the problems found while checking one section
#[derive(Debug, Default)]
pub struct Problems {
    found: Vec<ValidationError>,
}

impl Problems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a problem unless `value` lies in `range`
    pub fn check_range<T>(&mut self, field: &str, value: T, range: RangeInclusive<T>) -> &mut Self
    where
        T: PartialOrd + Display,
    {
        if !range.contains(&value) {
            self.found.push(ValidationError::new(
                field,
                format!(
                    "{} is outside {}..={}",
                    value,
                    range.start(),
                    range.end()
                ),
            ));
        }
        self
    }

    /// Records a problem when `value` is blank
    pub fn check_present(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.found.push(ValidationError::new(field, "must not be empty"));
        }
        self
    }

    pub fn finish(self) -> Result<(), Vec<ValidationError>> {
        if self.found.is_empty() {
            Ok(())
        } else {
            Err(self.found)
        }
    }
}
