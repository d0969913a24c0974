//! Enrollment data loading and aggregation
//!
//! This module owns everything between the CSV file and the render model:
//! - `Dataset`: the cached, immutable record table
//! - ranking of institutions for one language and year
//! - home institution vs. peer average comparison
//! - per-year trend series for both sides
//! - CSV export of rankings and of the whole table
//!
//! ## Error Handling
//!
//! Loading returns `DataResult<T>` with the `DataError` type. Any load error
//! means the dataset is unavailable and the session cannot continue. The
//! aggregations themselves never fail: a selection with no rows produces
//! empty output.

mod comparison;
mod dataset;
mod error;
mod export;
mod ranking;
mod trend;

pub use comparison::*;
pub use dataset::*;
pub use error::*;
pub use export::*;
pub use ranking::*;
pub use trend::*;
