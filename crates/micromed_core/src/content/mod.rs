//! Static content shown by the app: motivational phrases and the calendar.
//!
//! Both are pure lookups with no side effects.

pub mod calendar;
pub mod phrases;
