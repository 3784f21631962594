//! `Subject`: the type-erased, possibly-absent value a chain dispatches on.
//!
//! A chain never inspects its subject directly; every clause goes through the
//! two primitives defined here: [`is`](Subject::is) (the instance test) and
//! [`downcast_ref`](Subject::downcast_ref) (narrowing). The `None` variant
//! renders "no value present", so absent subjects flow through the same type
//! instead of an `Option` wrapper at every call site.
//!
//! # Labels
//!
//! A `Value` subject carries a static type-name label captured at conversion
//! time. Erasure makes the concrete name unrecoverable from `&dyn Any`, so
//! conversions from a concrete `&T` record `type_name::<T>()` while
//! conversions from an already-erased `&dyn Any` record `"dyn Any"`. The
//! label feeds diagnostics only; dispatch uses `TypeId`, never the label.

use std::any::{type_name, Any};
use std::fmt;

/// The erased subject a [`TypeSwitch`](crate::TypeSwitch) dispatches on.
///
/// # Variants
///
/// - `None`: no value present; only [`or_none`](crate::TypeSwitch::or_none)
///   clauses fire on this.
/// - `Value`: a borrowed value with its erased runtime type and a
///   diagnostic label.
///
/// # Example
///
/// ```
/// use typeswitch::Subject;
///
/// let n = 42_i32;
/// let subject = Subject::from(&n);
/// assert!(subject.is::<i32>());
/// assert!(!subject.is::<String>());
/// assert_eq!(subject.downcast_ref::<i32>(), Some(&42));
/// assert_eq!(subject.label(), "i32");
/// ```
///
/// # Erasure gotcha
///
/// Converting `&Box<dyn Any>` erases the *box*, not its contents: the type
/// test then only ever matches `Box<dyn Any>` itself. Deref first and pass
/// `&*boxed` (or `boxed.as_ref()`).
#[derive(Clone, Copy)]
pub enum Subject<'a> {
    /// No value present. Type tests always fail against this variant.
    None,

    /// A borrowed value with its erased runtime type.
    Value {
        /// The erased borrow the type tests run against.
        value: &'a dyn Any,
        /// Static type-name label for diagnostics.
        label: &'static str,
    },
}

impl<'a> Subject<'a> {
    /// Returns `true` if no value is present.
    ///
    /// # Example
    ///
    /// ```
    /// use typeswitch::Subject;
    ///
    /// assert!(Subject::None.is_none());
    /// assert!(!Subject::from(&1_u8).is_none());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The instance test: is the subject a value of type `T`?
    ///
    /// `Subject::None` is an instance of nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use typeswitch::Subject;
    ///
    /// let s = String::from("hi");
    /// assert!(Subject::from(&s).is::<String>());
    /// assert!(!Subject::from(&s).is::<i32>());
    /// assert!(!Subject::None.is::<String>());
    /// ```
    #[inline]
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        matches!(self, Self::Value { value, .. } if value.is::<T>())
    }

    /// Narrow the subject to `&T` if the instance test passes.
    ///
    /// The returned borrow keeps the subject's lifetime, not the chain's,
    /// so narrowed references outlive the clause that produced them.
    #[inline]
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&'a T> {
        match self {
            Self::Value { value, .. } => value.downcast_ref::<T>(),
            Self::None => Option::None,
        }
    }

    /// Diagnostic label for this subject: the captured type name, or
    /// `"none"` when no value is present.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Value { label, .. } => label,
            Self::None => "none",
        }
    }
}

impl fmt::Debug for Subject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("Subject::None"),
            Self::Value { label, .. } => f.debug_tuple("Subject::Value").field(label).finish(),
        }
    }
}

impl<'a, T: Any> From<&'a T> for Subject<'a> {
    fn from(value: &'a T) -> Self {
        Self::Value {
            value,
            label: type_name::<T>(),
        }
    }
}

impl<'a> From<&'a dyn Any> for Subject<'a> {
    fn from(value: &'a dyn Any) -> Self {
        Self::Value {
            value,
            label: "dyn Any",
        }
    }
}

impl<'a, T: Any> From<Option<&'a T>> for Subject<'a> {
    fn from(value: Option<&'a T>) -> Self {
        match value {
            Some(v) => Self::from(v),
            Option::None => Self::None,
        }
    }
}

impl<'a> From<Option<&'a dyn Any>> for Subject<'a> {
    fn from(value: Option<&'a dyn Any>) -> Self {
        match value {
            Some(v) => Self::from(v),
            Option::None => Self::None,
        }
    }
}
