//! typeswitch - fluent first-hit-wins type dispatch over `dyn Any` subjects
//!
//! Replaces manual downcast ladders with a readable chain: wrap a value whose
//! concrete type is only known at runtime, list "if it is a `T`, handle it
//! this way" clauses, and finish with a fallback, a no-value handler, or an
//! error for the caller to propagate.
//!
//! # Architecture
//!
//! - [`Subject<'a>`](Subject): erased, possibly-absent subject (borrowed
//!   `dyn Any` plus a diagnostic label, with a `None` variant)
//! - [`TypeSwitch<'a>`](TypeSwitch): the chain: one subject, one `resolved`
//!   flag, clauses evaluated eagerly in call order
//! - [`SwitchTrace`]: optional explain-trace of a dispatch, one step per
//!   clause (off the plain path; opt in with [`TypeSwitch::traced`])
//! - [`SwitchError`]: errors a chain can hand back to its caller
//!
//! # Key Semantics
//!
//! 1. **First hit wins**: the first successful type or none test resolves
//!    the chain; every later `or_*` clause returns without testing.
//!
//! 2. **`on` is unconditional**: the entry point's first clause must be able
//!    to populate `resolved`, so [`TypeSwitch::on`] never consults the flag
//!    and can re-fire on a resolved chain. Use [`TypeSwitch::or_on`] for all
//!    subsequent clauses.
//!
//! 3. **Handlers run eagerly**: each clause tests and dispatches during the
//!    call that registers it; nothing is deferred to a final "run" step.
//!
//! # Example
//!
//! ```
//! use std::any::Any;
//! use typeswitch::prelude::*;
//!
//! struct Heartbeat;
//! struct Payload { bytes: usize }
//!
//! fn describe(event: &dyn Any) -> String {
//!     let mut out = String::new();
//!     TypeSwitch::over(event, |_: &Heartbeat| out = "heartbeat".to_string())
//!         .or_on(|p: &Payload| out = format!("payload of {} bytes", p.bytes))
//!         .or_else(|s| out = format!("unknown event ({})", s.label()));
//!     out
//! }
//!
//! assert_eq!(describe(&Heartbeat), "heartbeat");
//! assert_eq!(describe(&Payload { bytes: 16 }), "payload of 16 bytes");
//! assert_eq!(describe(&0_u32), "unknown event (dyn Any)");
//! ```
//!
//! # When NOT to use this
//!
//! If the set of types is closed and yours, write an `enum` and `match` on
//! it. Chains earn their keep at seams where values arrive type-erased:
//! plugin payloads, heterogeneous event buses, `Box<dyn Any>` task results.

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod subject;
mod switch;
mod trace;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use subject::Subject;
pub use switch::TypeSwitch;
pub use trace::{ClauseKind, StepOutcome, SwitchStep, SwitchTrace};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use typeswitch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Trace types
        ClauseKind,
        StepOutcome,
        // Core types
        Subject,
        // Errors
        SwitchError,
        SwitchStep,
        SwitchTrace,
        TypeSwitch,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors a chain can hand back to its caller.
///
/// A chain only fails at its terminal: [`TypeSwitch::or_fail`] produces
/// `Unmatched` when no clause handled the subject. (The other error terminal,
/// [`TypeSwitch::or_raise`], returns the caller's own error value verbatim
/// and never constructs this type.)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SwitchError {
    /// No clause handled the subject.
    Unmatched {
        /// Label of the unhandled subject: its captured type name, or
        /// `"none"` for an absent subject.
        subject: &'static str,
    },
}

impl std::fmt::Display for SwitchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unmatched { subject } => {
                write!(
                    f,
                    "no clause handled subject of type \"{subject}\": add an or_else() \
                     fallback or a clause for this type"
                )
            }
        }
    }
}

impl std::error::Error for SwitchError {}
