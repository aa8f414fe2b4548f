//! State behind the search and signup forms. Nothing here is persisted; searches are only
//! logged on submit.

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::{
    api::SignupRequest,
    models::{ParseRoleError, Role},
};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    #[default]
    Oneway,
    Roundtrip,
    Multicity,
}

impl TripType {
    pub const ALL: [TripType; 3] = [TripType::Oneway, TripType::Roundtrip, TripType::Multicity];

    pub fn label(&self) -> &'static str {
        match self {
            TripType::Oneway => "One Way",
            TripType::Roundtrip => "Round Trip",
            TripType::Multicity => "Multi City",
        }
    }
}

pub const TRAVEL_CLASSES: [&str; 3] = ["Economy", "Business", "First Class"];
pub const MAX_TRAVELERS: u8 = 5;

pub fn travelers_label(count: u8) -> String {
    match count {
        1 => "1 Traveler".to_string(),
        n => format!("{n} Travelers"),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlightSearch {
    pub trip_type: TripType,
    pub from: String,
    pub to: String,
    pub depart_date: String,
    pub return_date: String,
    pub travelers: u8,
    pub travel_class: String,
}

impl Default for FlightSearch {
    fn default() -> Self {
        Self {
            trip_type: TripType::default(),
            from: "Dhaka (DAC)".to_string(),
            to: "Cox's Bazar (CXB)".to_string(),
            depart_date: "2025-09-10".to_string(),
            return_date: "2025-09-15".to_string(),
            travelers: 1,
            travel_class: TRAVEL_CLASSES[0].to_string(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FlightQuery {
    pub trip_type: TripType,
    pub from: String,
    pub to: String,
    pub depart_date: String,
    pub return_date: Option<String>,
    pub travelers: u8,
    pub travel_class: String,
}

impl FlightSearch {
    pub fn set_travelers(&mut self, value: &str) {
        if let Ok(n @ 1..=MAX_TRAVELERS) = value.parse::<u8>() {
            self.travelers = n;
        }
    }

    pub fn shows_return_date(&self) -> bool {
        self.trip_type == TripType::Roundtrip
    }

    pub fn query(&self) -> FlightQuery {
        FlightQuery {
            trip_type: self.trip_type,
            from: self.from.clone(),
            to: self.to.clone(),
            depart_date: self.depart_date.clone(),
            return_date: self.shows_return_date().then(|| self.return_date.clone()),
            travelers: self.travelers,
            travel_class: self.travel_class.clone(),
        }
    }
}

pub const HOTEL_FILTERS: [&str; 5] = ["Business", "Couples", "Families", "Friends", "Solo"];

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HotelSearch {
    pub location: String,
    pub check_in: String,
    pub check_out: String,
    pub rooms: u8,
    pub guests: u8,
    pub filters: Vec<String>,
}

impl Default for HotelSearch {
    fn default() -> Self {
        Self {
            location: "Cox’s Bazar, Bangladesh".to_string(),
            check_in: "2025-09-11".to_string(),
            check_out: "2025-09-12".to_string(),
            rooms: 1,
            guests: 2,
            filters: Vec::new(),
        }
    }
}

impl HotelSearch {
    pub fn toggle_filter(&mut self, filter: &str) {
        match self.filters.iter().position(|f| f == filter) {
            Some(idx) => {
                self.filters.remove(idx);
            }
            None => self.filters.push(filter.to_string()),
        }
    }

    pub fn has_filter(&self, filter: &str) -> bool {
        self.filters.iter().any(|f| f == filter)
    }

    pub fn occupancy(&self) -> String {
        format!("{} Room, {} Guests", self.rooms, self.guests)
    }
}

pub const TERMS_NOT_ACCEPTED: &str = "You must agree to the terms & policy.";

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub agree: bool,
}

impl SignupForm {
    /// Form preset from the `role` query parameter, e.g. the footer's guide signup link.
    pub fn with_role_param(param: Option<&str>) -> Self {
        let mut form = Self::default();
        form.apply_role_param(param);

        form
    }

    /// Switches the role picker to a recognised `role` query parameter, keeping what was typed.
    pub fn apply_role_param(&mut self, param: Option<&str>) {
        if let Some(role) = param.and_then(|r| r.parse().ok()) {
            self.role = role;
        }
    }

    pub fn set_role(&mut self, value: &str) -> Result<(), ParseRoleError> {
        self.role = Role::from_str(value)?;

        Ok(())
    }

    pub fn submit(&self) -> Result<SignupRequest, SignupFormError> {
        if !self.agree {
            return Err(SignupFormError);
        }

        Ok(SignupRequest {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: self.role,
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", TERMS_NOT_ACCEPTED)]
pub struct SignupFormError;
