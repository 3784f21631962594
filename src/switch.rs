//! `TypeSwitch`: the fluent dispatch chain with first-hit-wins semantics.
//!
//! A chain wraps one [`Subject`] and a `resolved` flag. Each clause tests the
//! subject against one target type and invokes its handler on success; the
//! flag suppresses every later short-circuiting clause. Terminals consume the
//! chain: a fallback handler, or an error for the caller to propagate.
//!
//! # First-hit-wins
//!
//! Clauses are evaluated strictly in call order. The first successful test
//! resolves the chain; `or_on`, `or_none`, `or_else`, and `or_raise` all
//! return without testing once the chain is resolved.
//!
//! # `on` is unconditional
//!
//! [`on`](TypeSwitch::on) does not consult the flag before testing. That is
//! what lets the entry point populate `resolved` with the very first clause,
//! and it means a resolved chain can re-fire if `on` is called again with a
//! matching type. Every clause after the first should use the
//! short-circuiting `or_*` variants.

use crate::trace::{ClauseKind, StepOutcome, SwitchTrace};
use crate::{Subject, SwitchError};
use std::any::{type_name, Any};
use std::fmt;

/// A fluent chain dispatching one subject to at most one matching handler.
///
/// Build a chain with [`over`](Self::over) (or [`traced`](Self::traced)),
/// add clauses with [`or_on`](Self::or_on) and [`or_none`](Self::or_none),
/// and finish with [`or_else`](Self::or_else), [`or_raise`](Self::or_raise),
/// or [`or_fail`](Self::or_fail). Handlers run eagerly, during the call that
/// registers them; nothing is deferred.
///
/// # Example
///
/// ```
/// use std::any::Any;
/// use typeswitch::TypeSwitch;
///
/// struct Circle { radius: f64 }
/// struct Square { side: f64 }
///
/// let shape: Box<dyn Any> = Box::new(Square { side: 3.0 });
/// let mut area = 0.0;
///
/// TypeSwitch::over(shape.as_ref(), |c: &Circle| area = 3.14 * c.radius * c.radius)
///     .or_on(|s: &Square| area = s.side * s.side)
///     .or_else(|_| area = f64::NAN);
///
/// assert_eq!(area, 9.0);
/// ```
///
/// # Thread Safety
///
/// A chain is a per-call-site value: it borrows its subject without a `Sync`
/// bound, so it is neither `Send` nor `Sync`, and the `resolved` flag is an
/// ordinary field. Build one chain per dispatch; never share one.
pub struct TypeSwitch<'a> {
    subject: Subject<'a>,
    resolved: bool,
    trace: Option<&'a mut SwitchTrace>,
}

impl<'a> TypeSwitch<'a> {
    fn new(subject: Subject<'a>, trace: Option<&'a mut SwitchTrace>) -> Self {
        Self {
            subject,
            resolved: false,
            trace,
        }
    }

    /// Entry point: wrap `subject` and immediately attempt the first clause.
    ///
    /// The target type is named by the handler's argument, so no turbofish
    /// is needed. Accepts anything convertible to [`Subject`]: `&T`,
    /// `&dyn Any`, `Option` of either, or a [`Subject`] directly
    /// (`Subject::None` for an absent subject).
    ///
    /// # Example
    ///
    /// ```
    /// use typeswitch::TypeSwitch;
    ///
    /// let mut seen = None;
    /// TypeSwitch::over(&7_u32, |n: &u32| seen = Some(*n));
    /// assert_eq!(seen, Some(7));
    /// ```
    pub fn over<T, F>(subject: impl Into<Subject<'a>>, on_hit: F) -> Self
    where
        T: Any,
        F: FnOnce(&T),
    {
        Self::new(subject.into(), Option::None).on(on_hit)
    }

    /// Like [`over`](Self::over), but records every clause into `trace`.
    ///
    /// Recording never changes dispatch behavior. See
    /// [`SwitchTrace`](crate::SwitchTrace) for what is captured.
    pub fn traced<T, F>(
        subject: impl Into<Subject<'a>>,
        trace: &'a mut SwitchTrace,
        on_hit: F,
    ) -> Self
    where
        T: Any,
        F: FnOnce(&T),
    {
        Self::new(subject.into(), Some(trace)).on(on_hit)
    }

    /// Unconditional type clause: test, and on success mark the chain
    /// resolved and invoke the handler with the narrowed borrow.
    ///
    /// This clause does NOT consult `resolved` first; calling it on an
    /// already-resolved chain tests again and can re-fire. Use
    /// [`or_on`](Self::or_on) for every clause after the first.
    ///
    /// # Example
    ///
    /// ```
    /// use typeswitch::TypeSwitch;
    ///
    /// let mut fired = Vec::new();
    /// TypeSwitch::over(&1_i32, |_: &i32| fired.push("first"))
    ///     .on(|_: &i32| fired.push("again"));
    ///
    /// // Unconditional: both clauses tested and fired.
    /// assert_eq!(fired, ["first", "again"]);
    /// ```
    pub fn on<T, F>(self, on_hit: F) -> Self
    where
        T: Any,
        F: FnOnce(&T),
    {
        self.clause(ClauseKind::On, on_hit)
    }

    /// Short-circuiting type clause: no-op if resolved, otherwise identical
    /// to [`on`](Self::on).
    ///
    /// # Example
    ///
    /// ```
    /// use std::any::Any;
    /// use typeswitch::TypeSwitch;
    ///
    /// let value: Box<dyn Any> = Box::new(String::from("hello"));
    /// let mut fired = Vec::new();
    ///
    /// TypeSwitch::over(value.as_ref(), |_: &i32| fired.push("int"))
    ///     .or_on(|_: &String| fired.push("string"))
    ///     .or_on(|_: &String| fired.push("shadowed"));
    ///
    /// // First hit wins; the second String clause is skipped.
    /// assert_eq!(fired, ["string"]);
    /// ```
    pub fn or_on<T, F>(mut self, on_hit: F) -> Self
    where
        T: Any,
        F: FnOnce(&T),
    {
        if self.resolved {
            self.record(ClauseKind::OrOn, Some(type_name::<T>()), StepOutcome::Skipped);
            return self;
        }
        self.clause(ClauseKind::OrOn, on_hit)
    }

    /// Short-circuiting no-value clause: if unresolved and the subject is
    /// [`Subject::None`], invoke the zero-argument handler and resolve.
    ///
    /// # Example
    ///
    /// ```
    /// use typeswitch::{Subject, TypeSwitch};
    ///
    /// let mut fired = Vec::new();
    /// TypeSwitch::over(Subject::None, |_: &i32| fired.push("int"))
    ///     .or_none(|| fired.push("absent"))
    ///     .or_else(|_| fired.push("other"));
    ///
    /// assert_eq!(fired, ["absent"]);
    /// ```
    pub fn or_none<F>(mut self, on_none: F) -> Self
    where
        F: FnOnce(),
    {
        if self.resolved {
            self.record(ClauseKind::OrNone, Option::None, StepOutcome::Skipped);
            return self;
        }
        if self.subject.is_none() {
            self.record(ClauseKind::OrNone, Option::None, StepOutcome::Hit);
            on_none();
            self.resolved = true;
        } else {
            self.record(ClauseKind::OrNone, Option::None, StepOutcome::Miss);
        }
        self
    }

    /// Fallback terminal: if unresolved, invoke the handler with the
    /// original un-narrowed subject.
    ///
    /// # Example
    ///
    /// ```
    /// use typeswitch::TypeSwitch;
    ///
    /// let mut label = "";
    /// TypeSwitch::over(&1.5_f64, |_: &i32| {}).or_else(|s| label = s.label());
    /// assert_eq!(label, "f64");
    /// ```
    pub fn or_else<F>(mut self, fallback: F)
    where
        F: FnOnce(Subject<'a>),
    {
        if self.resolved {
            self.record(ClauseKind::OrElse, Option::None, StepOutcome::Skipped);
            return;
        }
        self.record(ClauseKind::OrElse, Option::None, StepOutcome::Hit);
        fallback(self.subject);
    }

    /// Error terminal: if unresolved, return `Err(error)` with the caller's
    /// error value verbatim; otherwise `Ok(())`.
    ///
    /// # Errors
    ///
    /// Returns `error` unchanged when no prior clause fired.
    ///
    /// # Example
    ///
    /// ```
    /// use typeswitch::TypeSwitch;
    ///
    /// let outcome = TypeSwitch::over(&42_i32, |_: &String| {}).or_raise("not a string");
    /// assert_eq!(outcome, Err("not a string"));
    ///
    /// let outcome = TypeSwitch::over(&42_i32, |_: &i32| {}).or_raise("not an int");
    /// assert_eq!(outcome, Ok(()));
    /// ```
    pub fn or_raise<E>(mut self, error: E) -> Result<(), E> {
        if self.resolved {
            self.record(ClauseKind::OrRaise, Option::None, StepOutcome::Skipped);
            return Ok(());
        }
        self.record(ClauseKind::OrRaise, Option::None, StepOutcome::Hit);
        Err(error)
    }

    /// Error terminal with the crate's own error: like
    /// [`or_raise`](Self::or_raise), but supplies
    /// [`SwitchError::Unmatched`] naming the subject's type label.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::Unmatched`] when no prior clause fired.
    ///
    /// # Example
    ///
    /// ```
    /// use typeswitch::{SwitchError, TypeSwitch};
    ///
    /// let err = TypeSwitch::over(&2_u8, |_: &String| {}).or_fail().unwrap_err();
    /// assert_eq!(err, SwitchError::Unmatched { subject: "u8" });
    /// ```
    pub fn or_fail(self) -> Result<(), SwitchError> {
        let subject = self.subject.label();
        self.or_raise(SwitchError::Unmatched { subject })
    }

    /// Returns `true` if some clause has already handled the subject.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// The wrapped subject.
    #[must_use]
    pub fn subject(&self) -> Subject<'a> {
        self.subject
    }

    fn clause<T, F>(mut self, kind: ClauseKind, on_hit: F) -> Self
    where
        T: Any,
        F: FnOnce(&T),
    {
        let target = Some(type_name::<T>());
        match self.subject.downcast_ref::<T>() {
            Some(narrowed) => {
                self.record(kind, target, StepOutcome::Hit);
                self.resolved = true;
                on_hit(narrowed);
            }
            Option::None => self.record(kind, target, StepOutcome::Miss),
        }
        self
    }

    fn record(&mut self, clause: ClauseKind, target: Option<&'static str>, outcome: StepOutcome) {
        if let Some(trace) = self.trace.as_deref_mut() {
            trace.push(clause, target, outcome);
        }
    }
}

impl fmt::Debug for TypeSwitch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeSwitch")
            .field("subject", &self.subject)
            .field("resolved", &self.resolved)
            .field("traced", &self.trace.is_some())
            .finish()
    }
}
