//! Bookkeeping logic: the recorder, the consistency resolver, the
//! profitability report, and the facade that ties them to persistence.

pub mod bookkeeper;
pub mod recorder;
pub mod report;
pub mod resolver;

pub use bookkeeper::Bookkeeper;
pub use recorder::TransactionRecorder;
pub use report::ProfitabilityReport;
pub use resolver::ConsistencyResolver;
