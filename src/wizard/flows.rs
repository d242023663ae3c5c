//! Prebuilt step lists for the two wizard flows the site ships: the
//! marketplace checkout and the itinerary planner. Pages construct a
//! fresh `Wizard` from one of these on mount and drop it on navigation.

use crate::error::Result;
use crate::wizard::{Answers, StepDef, Wizard};

/// Field names shared between the flows and their host pages.
pub mod fields {
    pub const TRAVELERS: &str = "travelers";
    pub const START_DATE: &str = "start_date";
    pub const END_DATE: &str = "end_date";
    pub const BUDGET: &str = "budget";
    pub const INTERESTS: &str = "interests";

    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const ADDRESS: &str = "address";
    pub const PAYMENT_METHOD: &str = "payment_method";
}

/// Itinerary planner: dates → budget → interests → review.
pub fn itinerary_wizard() -> Result<Wizard> {
    let steps = vec![
        StepDef::new(
            "dates",
            Box::new(|answers: &Answers| {
                answers.count(fields::TRAVELERS).map_or(false, |n| n > 0)
                    && answers.date(fields::START_DATE).is_some()
            }),
        ),
        StepDef::new(
            "budget",
            Box::new(|answers: &Answers| {
                answers.number(fields::BUDGET).map_or(false, |b| b > 0.0)
            }),
        ),
        StepDef::new(
            "interests",
            Box::new(|answers: &Answers| {
                answers
                    .text_list(fields::INTERESTS)
                    .map_or(false, |list| !list.is_empty())
            }),
        ),
        StepDef::always_valid("review"),
    ];
    Wizard::new(steps)
}

/// Marketplace checkout: contact → delivery → payment → review.
pub fn checkout_wizard() -> Result<Wizard> {
    let steps = vec![
        StepDef::new(
            "contact",
            Box::new(|answers: &Answers| {
                let name_given = answers.text(fields::NAME).map_or(false, |s| !s.is_empty());
                // The source form only checked for an '@'; full address
                // validation belongs to the backend we don't have.
                let email_plausible = answers
                    .text(fields::EMAIL)
                    .map_or(false, |s| s.contains('@'));
                name_given && email_plausible
            }),
        ),
        StepDef::new(
            "delivery",
            Box::new(|answers: &Answers| {
                answers
                    .text(fields::ADDRESS)
                    .map_or(false, |s| !s.trim().is_empty())
            }),
        ),
        StepDef::new(
            "payment",
            Box::new(|answers: &Answers| answers.contains(fields::PAYMENT_METHOD)),
        ),
        StepDef::always_valid("review"),
    ];
    Wizard::new(steps)
}
