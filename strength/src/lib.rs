//! # Strength
//!
//! One-repetition maximum (1RM) estimation and RPE charts.
//!
//! - [`one_rm`] - Brzycki, Epley, McGlothin and Lombardi estimators, the
//!   blended estimate with lifter/exercise adjustments and the N-rep table.
//! - [`rpe`] - rate of perceived exertion to %1RM lookups and back.

mod error;
pub mod one_rm;
pub mod rpe;

pub use self::error::DomainError;
pub use self::one_rm::{Exercise, LiftSet, Lifter, RepMax, Sex};
