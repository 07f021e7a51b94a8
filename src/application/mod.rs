//! Application layer: the assessment pipeline components and the
//! orchestrating service.

mod assessment;
mod classifier;
mod preprocess;
mod recommend;
mod validator;

pub use assessment::AssessmentService;
pub use classifier::Classifier;
pub use preprocess::Preprocessor;
pub use recommend::RecommendationEngine;
pub use validator::Validator;
