pub mod estimate;
pub mod property;

pub use estimate::{PriceEstimate, Prediction, PredictionSource, TrendPoint};
pub use property::{Condition, FormDefaults, Neighborhood, PropertyAttributes, ValidationError};
