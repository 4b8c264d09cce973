mod errors;
mod seeder;

pub use errors::SeederError;
pub use seeder::{FailedSubmission, FailureReason, RunReport, Seeder};
