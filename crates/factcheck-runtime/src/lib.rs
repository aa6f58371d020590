//! # factcheck-runtime
//!
//! The surrounding system for the factcheck assessment engine: the
//! blocking fetch capability, payload-to-text extraction, the notifier
//! capability for failure alerts, and the [`FactChecker`] façade that
//! turns a fetched fact into a human-readable report line.
//!
//! The assessment engine itself lives in `factcheck-core` and has no
//! error cases; everything that can fail lives here, with distinct
//! failure kinds for transport and structural problems.
//!
//! ## Example
//!
//! ```rust,ignore
//! use factcheck_core::DefaultAssessor;
//! use factcheck_runtime::{FactChecker, HttpFetcher};
//!
//! let fetcher = HttpFetcher::new()?;
//! let checker = FactChecker::new(fetcher, DefaultAssessor::default());
//!
//! println!("{}", checker.random_fact());
//! ```

pub mod checker;
pub mod fetcher;
pub mod notify;

pub use checker::{FactChecker, API_URL};
pub use fetcher::{FetchError, Fetcher, HttpFetcher, FETCH_TIMEOUT};
pub use notify::{Notifier, NullNotifier};
