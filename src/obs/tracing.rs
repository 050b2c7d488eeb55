// self
use crate::{_prelude::*, obs::FlowKind};

/// Span wrapping one adapter hook invocation.
///
/// Compiles down to a zero-sized no-op when the `tracing` feature is disabled.
#[derive(Clone, Debug)]
pub struct FlowSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FlowSpan {
	/// Opens an `oauth2_salesforce.flow` span for `kind`, tagged with the hook name in `stage`.
	pub fn new(kind: FlowKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("oauth2_salesforce.flow", flow = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Runs a synchronous hook body inside the span.
	pub fn in_scope<R>(&self, f: impl FnOnce() -> R) -> R {
		#[cfg(feature = "tracing")]
		{
			self.span.in_scope(f)
		}
		#[cfg(not(feature = "tracing"))]
		{
			f()
		}
	}

	/// Attaches the span to an async hook body; nothing is held across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> impl Future<Output = Fut::Output>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			tracing::Instrument::instrument(fut, self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}

	/// Emits a debug event inside the span marking a completed step.
	pub fn record_step(&self, step: &'static str) {
		#[cfg(feature = "tracing")]
		{
			self.span.in_scope(|| tracing::debug!(step, "adapter step completed"));
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = step;
		}
	}
}
