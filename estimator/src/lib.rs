//! # Estimator
//!
//! Runs the fitness calculators on user input and keeps the results.
//!
//! - [`Estimator`] - validated computation, estimation history, VBT sets,
//!   health records and training plans over a [`KeyValueStore`]
//! - [`Fields`] / [`MeasurementInput`] - raw form values and their parsed,
//!   typed form per [`Calculator`]
//! - [`labels`] - display names for the identifiers in results
//! - [`store`] - JSON list persistence on a host key-value store
//!
//! ```
//! use estimator::{Estimator, EstimatorConfig, MeasurementInput, MemoryStore};
//!
//! let estimator = Estimator::new(MemoryStore::new(), EstimatorConfig::new());
//! let outcome = estimator
//!     .compute(&MeasurementInput::MacrosToCalories {
//!         protein: 100.0,
//!         carbs: 200.0,
//!         fat: 50.0,
//!     })
//!     .unwrap();
//! assert!(outcome.metric().is_some());
//! ```

mod calculators;
mod config;
mod engine;
mod error;
mod fields;
mod health;
mod input;
pub mod labels;
mod metric;
mod record;
pub mod store;

pub use self::config::{DisplayConfig, EstimatorConfig, Locale};
pub use self::engine::Estimator;
pub use self::error::{BoxError, DomainError, EstimationError, StorageError, ValidationError};
pub use self::fields::Fields;
pub use self::health::{HealthEntry, HealthRecord};
pub use self::input::{Calculator, MeasurementInput};
pub use self::labels::Translator;
pub use self::metric::{EstimatedMetric, Outcome};
pub use self::record::{HistoryRecord, Saved};
pub use self::store::{KeyValueStore, MemoryStore};
