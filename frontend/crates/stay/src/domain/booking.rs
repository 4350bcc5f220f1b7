//! Booking Form
//!
//! Field-level validation run before a booking is submitted. The backend
//! still owns availability and conflicts.

use chrono::NaiveDate;

use crate::domain::value_objects::{Price, StayQuote};

/// Raw booking form state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    /// Signed: the input box can hold zero or negative numbers
    pub number_of_guests: i64,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            check_in: None,
            check_out: None,
            number_of_guests: 1,
        }
    }
}

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingErrors {
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub number_of_guests: Option<String>,
}

impl BookingErrors {
    pub fn is_empty(&self) -> bool {
        self.check_in.is_none() && self.check_out.is_none() && self.number_of_guests.is_none()
    }

    /// Messages in form order
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        [&self.check_in, &self.check_out, &self.number_of_guests]
            .into_iter()
            .filter_map(|message| message.as_deref())
    }
}

impl std::fmt::Display for BookingErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.messages().collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Form values that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidBooking {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub number_of_guests: u32,
}

impl BookingForm {
    /// Change check-in, dropping a check-out that is no longer after it
    pub fn set_check_in(&mut self, check_in: Option<NaiveDate>) {
        self.check_in = check_in;
        if let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) {
            if check_out <= check_in {
                self.check_out = None;
            }
        }
    }

    pub fn set_check_out(&mut self, check_out: Option<NaiveDate>) {
        self.check_out = check_out;
    }

    pub fn set_guests(&mut self, guests: i64) {
        self.number_of_guests = guests;
    }

    /// Back to the empty form
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Nights and total while both dates are set and ordered
    pub fn quote(&self, price: Price) -> Option<StayQuote> {
        StayQuote::new(self.check_in?, self.check_out?, price)
    }

    pub fn validate(&self, today: NaiveDate, max_guests: u32) -> Result<ValidBooking, BookingErrors> {
        let mut errors = BookingErrors::default();

        match self.check_in {
            None => errors.check_in = Some("Check-in date is required".to_string()),
            Some(check_in) if check_in < today => {
                errors.check_in = Some("Check-in date cannot be in the past".to_string())
            }
            Some(_) => {}
        }

        match (self.check_in, self.check_out) {
            (_, None) => errors.check_out = Some("Check-out date is required".to_string()),
            (Some(check_in), Some(check_out)) if check_out <= check_in => {
                errors.check_out = Some("Check-out must be after check-in".to_string())
            }
            _ => {}
        }

        if self.number_of_guests < 1 {
            errors.number_of_guests = Some("At least 1 guest is required".to_string());
        } else if self.number_of_guests > i64::from(max_guests) {
            errors.number_of_guests = Some(format!("Maximum {} guests allowed", max_guests));
        }

        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) if errors.is_empty() => Ok(ValidBooking {
                check_in,
                check_out,
                // Bounded by max_guests above
                number_of_guests: self.number_of_guests as u32,
            }),
            _ => Err(errors),
        }
    }
}
