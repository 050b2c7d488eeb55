//! Optional observability helpers for adapter stages.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth2_salesforce.flow` with the `flow`
//!   (adapter stage) and `stage` (call site) fields.
//! - Enable `metrics` to increment the `oauth2_salesforce_flow_total` counter for every
//!   attempt/success/failure, labeled by `flow` + `outcome`.
//!
//! Neither layer ever records parameter values, tokens, or profile contents.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Adapter stages observed by the instrumentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowKind {
	/// Decoration of outgoing authorization-request parameters.
	Authorization,
	/// Userinfo lookup and profile normalization.
	UserProfile,
}
impl FlowKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowKind::Authorization => "authorization",
			FlowKind::UserProfile => "user_profile",
		}
	}
}
impl Display for FlowKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOutcome {
	/// Entry to an adapter hook.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl FlowOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowOutcome::Attempt => "attempt",
			FlowOutcome::Success => "success",
			FlowOutcome::Failure => "failure",
		}
	}

	/// Classifies a finished hook result.
	pub fn from_result<T, E>(result: &Result<T, E>) -> Self {
		match result {
			Ok(_) => FlowOutcome::Success,
			Err(_) => FlowOutcome::Failure,
		}
	}
}
impl Display for FlowOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
