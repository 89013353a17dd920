//! Provider dashboard editors: weekly availability rows and the offered
//! services checklist.

#[cfg(test)]
#[path = "provider_settings_test.rs"]
mod provider_settings_test;

use crate::net::types::AvailabilitySlot;
use crate::util::dates::parse_clock;

pub const DEFAULT_DAY: u8 = 1;
pub const DEFAULT_START: &str = "09:00";
pub const DEFAULT_END: &str = "17:00";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AvailabilityEditor {
    pub rows: Vec<AvailabilitySlot>,
}

impl AvailabilityEditor {
    /// Append a Monday 09:00-17:00 row.
    pub fn add_row(&mut self) {
        self.rows.push(AvailabilitySlot {
            id: None,
            day_of_week: DEFAULT_DAY,
            start_time: DEFAULT_START.to_owned(),
            end_time: DEFAULT_END.to_owned(),
        });
    }

    pub fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    pub fn set_day(&mut self, index: usize, day: u8) {
        if let Some(row) = self.rows.get_mut(index) {
            row.day_of_week = day.min(6);
        }
    }

    pub fn set_start(&mut self, index: usize, value: String) {
        if let Some(row) = self.rows.get_mut(index) {
            row.start_time = value;
        }
    }

    pub fn set_end(&mut self, index: usize, value: String) {
        if let Some(row) = self.rows.get_mut(index) {
            row.end_time = value;
        }
    }

    /// Rows ready to send, or the first problem found.
    ///
    /// # Errors
    ///
    /// Returns a message when a time is unreadable or a row ends before it
    /// starts.
    pub fn validate(&self) -> Result<Vec<AvailabilitySlot>, &'static str> {
        for row in &self.rows {
            let (Some(start), Some(end)) = (parse_clock(&row.start_time), parse_clock(&row.end_time)) else {
                return Err("Enter start and end times as HH:MM.");
            };
            if end <= start {
                return Err("Each time slot must end after it starts.");
            }
        }
        Ok(self.rows.clone())
    }
}

/// Ids of the services a provider offers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceSelection {
    ids: Vec<i64>,
}

impl ServiceSelection {
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        let mut selection = Self::default();
        for id in ids {
            if !selection.contains(id) {
                selection.ids.push(id);
            }
        }
        selection
    }

    pub fn toggle(&mut self, id: i64) {
        if let Some(pos) = self.ids.iter().position(|s| *s == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }
}
