use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

// Bookable slots run 08:00–18:00 in 30-minute increments; the last slot
// starts at 17:30.
const GRID_START_HOUR: u32 = 8;
const GRID_END_HOUR: u32 = 18;
const SLOT_MINUTES: u32 = 30;

// Bookings open tomorrow and close 90 days out.
const WINDOW_DAYS: i64 = 90;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingWindow {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

impl BookingWindow {
    pub fn from_today(today: NaiveDate) -> Self {
        let min_date = today + Duration::days(1);
        Self {
            min_date,
            max_date: min_date + Duration::days(WINDOW_DAYS),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.min_date && date <= self.max_date
    }
}

/// The full fixed grid of bookable start times, as "HH:MM" strings.
pub fn slot_grid() -> Vec<String> {
    let mut slots = Vec::new();
    let mut minutes = GRID_START_HOUR * 60;
    while minutes < GRID_END_HOUR * 60 {
        slots.push(format!("{:02}:{:02}", minutes / 60, minutes % 60));
        minutes += SLOT_MINUTES;
    }
    slots
}

pub fn is_grid_slot(time: &str) -> bool {
    slot_grid().iter().any(|slot| slot == time)
}
