//! Production implementations of the runtime ports.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::services::{AccessCodeGenerator, Clock, IdGenerator};
use crate::utils::code_generator::generate_code;

/// Reads the system wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Generates random UUIDv4 document ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Generates 12-character URL-safe access codes from OS entropy.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomAccessCodeGenerator;

impl AccessCodeGenerator for RandomAccessCodeGenerator {
    fn generate(&self) -> String {
        generate_code()
    }
}
