// self
use crate::obs::{FlowKind, FlowOutcome};

/// Increments `oauth2_salesforce_flow_total{flow, outcome}` on the global metrics recorder.
pub fn record_flow_outcome(kind: FlowKind, outcome: FlowOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth2_salesforce_flow_total",
			"flow" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

/// Records the terminal outcome of a fallible hook and returns `result` untouched.
pub fn record_flow_result<T, E>(kind: FlowKind, result: Result<T, E>) -> Result<T, E> {
	record_flow_outcome(kind, FlowOutcome::from_result(&result));

	result
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_flow_result_passes_values_through() {
		record_flow_outcome(FlowKind::Authorization, FlowOutcome::Attempt);

		assert_eq!(
			record_flow_result(FlowKind::UserProfile, Ok::<_, ()>("profile")),
			Ok("profile")
		);
		assert_eq!(record_flow_result(FlowKind::UserProfile, Err::<(), _>("401")), Err("401"));
	}
}
