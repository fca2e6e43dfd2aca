// Candidate screening engine.
// Extraction (text -> CandidateProfile) and scoring (profile + JobSpec -> scores) are pure,
// synchronous and independent of each other; handlers are the only async, logging layer.

pub mod extractor;
pub mod handlers;
pub mod models;
pub mod ranking;
pub mod scorer;
pub mod sections;
pub mod vocabulary;
