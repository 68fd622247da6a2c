//! # Checkpoint Verdicts
//!
//! The single [`Verdict`] enum used across the stack for the outcome a
//! monitored agent's action was assigned at a checkpoint. One definition,
//! exhaustive `match` everywhere; the lowercase wire strings are part of
//! both the JSON format and the chain-hash preimage, so they are fixed.

use serde::{Deserialize, Serialize};

/// The verdict recorded for one monitored agent action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The action conformed to the governing policy card.
    Compliant,
    /// The action violated the governing policy card.
    Violation,
    /// The evaluator could not reach a determination.
    Uncertain,
}

impl Verdict {
    /// The wire string for this verdict — used verbatim in hash preimages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::Violation => "violation",
            Self::Uncertain => "uncertain",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings_are_lowercase() {
        assert_eq!(Verdict::Compliant.as_str(), "compliant");
        assert_eq!(Verdict::Violation.as_str(), "violation");
        assert_eq!(Verdict::Uncertain.as_str(), "uncertain");
    }

    #[test]
    fn serde_matches_as_str() {
        for v in [Verdict::Compliant, Verdict::Violation, Verdict::Uncertain] {
            let json = serde_json::to_string(&v).unwrap();
            assert_eq!(json, format!("\"{}\"", v.as_str()));
            let back: Verdict = serde_json::from_str(&json).unwrap();
            assert_eq!(back, v);
        }
    }

    #[test]
    fn unknown_verdict_rejected() {
        let result: Result<Verdict, _> = serde_json::from_str("\"maybe\"");
        assert!(result.is_err());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", Verdict::Violation), "violation");
    }
}
