//! Diagnostics emitted while parsing and resolving list expressions.

/// An error message tagged with the phase that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[salsa::accumulator]
pub struct Diagnostic {
    pub message: String,
    pub phase: ResolutionPhase,
}

/// Phase where a diagnostic was emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolutionPhase {
    Parsing,
    Resolution,
}

impl Diagnostic {
    pub fn new(phase: ResolutionPhase, message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            phase,
        }
    }
}

impl std::fmt::Display for ResolutionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionPhase::Parsing => write!(f, "parse"),
            ResolutionPhase::Resolution => write!(f, "resolve"),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} error: {}", self.phase, self.message)
    }
}
