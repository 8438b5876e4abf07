pub mod config;
pub mod error;
pub mod event;
pub mod form;
pub mod input;
pub mod model;

mod form_test;

pub use config::AvailabilityConfig;
pub use error::{FormError, Result};
pub use event::{ControlChange, ControlKind, FormEvent};
pub use form::FormController;
pub use input::{apply, expand_day, parse_assignments, Assignment};
pub use model::day::Day;
pub use model::row::{DayRow, TIME_PLACEHOLDER};
