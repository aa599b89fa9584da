pub mod feedback;
pub mod prediction;
pub mod user;
