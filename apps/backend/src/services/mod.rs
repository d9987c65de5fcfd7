pub mod rounds;
pub mod scorecard_import;
pub mod stats;

pub use rounds::RoundService;
pub use scorecard_import::{ScorecardImportService, ScorecardUpload};
