/// Subsystems that register deferred activation work.
///
/// Only used to label registrations in traces and failure reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferredComponent {
	Debugger,
	Roslyn,
}

impl DeferredComponent {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Debugger => "debugger",
			Self::Roslyn => "roslyn",
		}
	}
}

impl std::fmt::Display for DeferredComponent {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
