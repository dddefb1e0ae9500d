//! Shared fixtures for the command and interactive-loop tests.

use std::cell::RefCell;

use callrep_core::Representative;
use callrep_fivecalls::{LookupError, LookupOutcome};

use crate::lookup::RepresentativeSource;

/// Canned lookup results, handed out in call order.
pub(crate) struct FakeSource {
    results: RefCell<Vec<Result<LookupOutcome, LookupError>>>,
    pub(crate) calls: RefCell<Vec<String>>,
}

impl FakeSource {
    pub(crate) fn new(results: Vec<Result<LookupOutcome, LookupError>>) -> Self {
        Self {
            results: RefCell::new(results),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl RepresentativeSource for FakeSource {
    async fn lookup(&self, zip_code: &str) -> Result<LookupOutcome, LookupError> {
        self.calls.borrow_mut().push(zip_code.to_string());
        let mut results = self.results.borrow_mut();
        if results.is_empty() {
            Ok(LookupOutcome::default())
        } else {
            results.remove(0)
        }
    }
}

pub(crate) fn outcome() -> LookupOutcome {
    let reps: Vec<Representative> = serde_json::from_value(serde_json::json!([
        {
            "name": "Ilhan Omar",
            "area": "US House",
            "state": "MN",
            "district": "5",
            "party": "Democrat",
            "phone": "202-225-4755",
            "url": "https://omar.house.gov",
            "field_offices": [{ "city": "Minneapolis", "phone": "612-333-1272" }]
        },
        {
            "name": "Amy Klobuchar",
            "area": "US Senate",
            "state": "MN",
            "party": "Democrat"
        }
    ]))
    .expect("fixture should deserialize");
    LookupOutcome {
        representatives: reps,
        warning: None,
        location: None,
    }
}
