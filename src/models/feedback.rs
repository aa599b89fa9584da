#[derive(Debug, Clone)]
pub struct FeedbackEntry {
    pub name: String,
    pub email: String,
    pub message: String,
}
