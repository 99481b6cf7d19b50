pub mod about;
pub mod error;
pub mod home;
pub mod predict;
pub mod results;

pub use about::about_page;
pub use error::error_page;
pub use home::home_page;
pub use predict::{predict_page, PredictForm};
pub use results::{results_page, ResultsVm};
