pub mod controller;

pub use controller::{AnalysisOutcome, SessionController};
