#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    // Attempt lifecycle
    Started,
    Succeeded,
    Failed { message: String },

    // Local validation refused the input; no call was made
    Rejected { message: String },

    // Screen left and re-entered
    Reset,
}
