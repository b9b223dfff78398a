// --- File: crates/bookcheck_scenarios/src/context.rs ---
//! Per-scenario shared state.
//!
//! A fresh context is created for every scenario and passed by `&mut` into
//! the steps that need it. Nothing here outlives its scenario, so two
//! scenarios can never see each other's filters or booking ids.

use std::collections::HashMap;

use serde_json::Value;

const KEY_TEST_BOOKING_ID: &str = "test_booking_id";
const KEY_FILTER_FIRSTNAME: &str = "filter_firstname";
const KEY_FILTER_LASTNAME: &str = "filter_lastname";
const KEY_FILTER_CHECKIN: &str = "filter_checkin";
const KEY_FILTER_CHECKOUT: &str = "filter_checkout";

/// Key/value facts shared across the steps of one scenario.
#[derive(Debug, Default)]
pub struct ScenarioContext {
    values: HashMap<String, Value>,
}

impl ScenarioContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.values.get(key).and_then(Value::as_i64)
    }

    pub fn set_test_booking_id(&mut self, id: i64) {
        self.set(KEY_TEST_BOOKING_ID, id);
    }

    pub fn test_booking_id(&self) -> Option<i64> {
        self.get_i64(KEY_TEST_BOOKING_ID)
    }

    pub fn set_name_filters(&mut self, firstname: &str, lastname: &str) {
        self.set(KEY_FILTER_FIRSTNAME, firstname);
        self.set(KEY_FILTER_LASTNAME, lastname);
    }

    pub fn filter_firstname(&self) -> Option<&str> {
        self.get_str(KEY_FILTER_FIRSTNAME)
    }

    pub fn filter_lastname(&self) -> Option<&str> {
        self.get_str(KEY_FILTER_LASTNAME)
    }

    pub fn set_date_filters(&mut self, checkin: &str, checkout: &str) {
        self.set(KEY_FILTER_CHECKIN, checkin);
        self.set(KEY_FILTER_CHECKOUT, checkout);
    }

    pub fn filter_checkin(&self) -> Option<&str> {
        self.get_str(KEY_FILTER_CHECKIN)
    }

    pub fn filter_checkout(&self) -> Option<&str> {
        self.get_str(KEY_FILTER_CHECKOUT)
    }

    pub fn reset(&mut self) {
        self.values.clear();
    }
}
