// src/runtime/matcher.rs
//
// Per-argument match predicates. Matchers are positional: a setup's matcher
// list must align 1:1 with an invocation's argument list for the setup to
// claim the call.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::runtime::value::{ArgValue, OrdValue, TypeTag};

/// Whether a range matcher includes or excludes its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeMode {
    Inclusive,
    Exclusive,
}

/// A predicate over a single recorded argument.
///
/// Equality between matchers compares configuration intent, not behavior:
/// two `Exact` matchers are equal when their values are, two `AnyOfType`
/// matchers when their types are, and predicate matchers only when they share
/// the same predicate instance. Setup lookup relies on this to hand back the
/// same record for equivalently configured setups.
pub enum ArgMatcher {
    /// Literal equality against a configured value.
    Exact(Box<dyn ArgValue>),
    /// Any value of the tagged type.
    AnyOfType(TypeTag),
    /// Caller-supplied predicate over the tagged type.
    Where {
        ty: TypeTag,
        predicate: Rc<dyn Fn(&dyn ArgValue) -> bool>,
    },
    /// An `Option` argument that must be `None`.
    IsNull {
        ty: TypeTag,
        check: fn(&dyn ArgValue) -> bool,
    },
    /// An `Option` argument that must be `Some`.
    NotNull {
        ty: TypeTag,
        check: fn(&dyn ArgValue) -> bool,
    },
    /// Membership in a fixed set of values.
    OneOf(Vec<Box<dyn ArgValue>>),
    /// Range test over ordered values, endpoints per `RangeMode`.
    InRange {
        low: Box<dyn OrdValue>,
        high: Box<dyn OrdValue>,
        mode: RangeMode,
    },
}

impl ArgMatcher {
    /// Test a recorded argument against this matcher.
    pub fn matches(&self, value: &dyn ArgValue) -> bool {
        match self {
            ArgMatcher::Exact(expected) => expected.eq_value(value),
            ArgMatcher::AnyOfType(ty) => ty.matches_value(value),
            ArgMatcher::Where { predicate, .. } => predicate(value),
            ArgMatcher::IsNull { check, .. } | ArgMatcher::NotNull { check, .. } => check(value),
            ArgMatcher::OneOf(values) => values.iter().any(|member| member.eq_value(value)),
            ArgMatcher::InRange { low, high, mode } => {
                let Some(below) = low.partial_cmp_value(value) else {
                    return false;
                };
                let Some(above) = high.partial_cmp_value(value) else {
                    return false;
                };
                match mode {
                    RangeMode::Inclusive => below != Ordering::Greater && above != Ordering::Less,
                    RangeMode::Exclusive => below == Ordering::Less && above == Ordering::Greater,
                }
            }
        }
    }
}

impl PartialEq for ArgMatcher {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ArgMatcher::Exact(a), ArgMatcher::Exact(b)) => a.eq_value(b.as_ref()),
            (ArgMatcher::AnyOfType(a), ArgMatcher::AnyOfType(b)) => a == b,
            (
                ArgMatcher::Where {
                    ty: a, predicate: p, ..
                },
                ArgMatcher::Where {
                    ty: b, predicate: q, ..
                },
            ) => a == b && Rc::ptr_eq(p, q),
            (ArgMatcher::IsNull { ty: a, .. }, ArgMatcher::IsNull { ty: b, .. }) => a == b,
            (ArgMatcher::NotNull { ty: a, .. }, ArgMatcher::NotNull { ty: b, .. }) => a == b,
            (ArgMatcher::OneOf(a), ArgMatcher::OneOf(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b)
                        .all(|(left, right)| left.eq_value(right.as_ref()))
            }
            (
                ArgMatcher::InRange {
                    low: al,
                    high: ah,
                    mode: am,
                },
                ArgMatcher::InRange {
                    low: bl,
                    high: bh,
                    mode: bm,
                },
            ) => {
                am == bm
                    && al.as_arg_value().eq_value(bl.as_arg_value())
                    && ah.as_arg_value().eq_value(bh.as_arg_value())
            }
            _ => false,
        }
    }
}

impl fmt::Debug for ArgMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgMatcher::Exact(value) => f.debug_tuple("Exact").field(value).finish(),
            ArgMatcher::AnyOfType(ty) => f.debug_tuple("AnyOfType").field(&ty.name()).finish(),
            ArgMatcher::Where { ty, .. } => f
                .debug_struct("Where")
                .field("ty", &ty.name())
                .finish_non_exhaustive(),
            ArgMatcher::IsNull { ty, .. } => f.debug_tuple("IsNull").field(&ty.name()).finish(),
            ArgMatcher::NotNull { ty, .. } => f.debug_tuple("NotNull").field(&ty.name()).finish(),
            ArgMatcher::OneOf(values) => f.debug_tuple("OneOf").field(values).finish(),
            ArgMatcher::InRange { low, high, mode } => f
                .debug_struct("InRange")
                .field("low", low)
                .field("high", high)
                .field("mode", mode)
                .finish(),
        }
    }
}

fn option_is_none<T: Any>(value: &dyn ArgValue) -> bool {
    value
        .as_any()
        .downcast_ref::<Option<T>>()
        .is_some_and(|option| option.is_none())
}

fn option_is_some<T: Any>(value: &dyn ArgValue) -> bool {
    value
        .as_any()
        .downcast_ref::<Option<T>>()
        .is_some_and(|option| option.is_some())
}

/// Matcher constructors, mirroring the argument-matching vocabulary the
/// generated mocks are configured with.
pub struct Arg;

impl Arg {
    /// Match a single literal value.
    pub fn is<T: Any + fmt::Debug + PartialEq>(value: T) -> ArgMatcher {
        ArgMatcher::Exact(Box::new(value))
    }

    /// Match any value of type `T`.
    pub fn is_any<T: Any>() -> ArgMatcher {
        ArgMatcher::AnyOfType(TypeTag::of::<T>())
    }

    /// Match values of type `T` accepted by the predicate.
    pub fn matching<T: Any>(predicate: impl Fn(&T) -> bool + 'static) -> ArgMatcher {
        ArgMatcher::Where {
            ty: TypeTag::of::<T>(),
            predicate: Rc::new(move |value: &dyn ArgValue| {
                value
                    .as_any()
                    .downcast_ref::<T>()
                    .is_some_and(|value| predicate(value))
            }),
        }
    }

    /// Match an `Option<T>` argument that is `None`.
    pub fn is_null<T: Any>() -> ArgMatcher {
        ArgMatcher::IsNull {
            ty: TypeTag::of::<Option<T>>(),
            check: option_is_none::<T>,
        }
    }

    /// Match an `Option<T>` argument that is `Some`.
    pub fn is_not_null<T: Any>() -> ArgMatcher {
        ArgMatcher::NotNull {
            ty: TypeTag::of::<Option<T>>(),
            check: option_is_some::<T>,
        }
    }

    /// Match any of a fixed set of values.
    pub fn is_in<T: Any + fmt::Debug + PartialEq>(values: impl IntoIterator<Item = T>) -> ArgMatcher {
        ArgMatcher::OneOf(
            values
                .into_iter()
                .map(|value| Box::new(value) as Box<dyn ArgValue>)
                .collect(),
        )
    }

    /// Match values between `low` and `high`, endpoints per `mode`.
    pub fn is_in_range<T: Any + fmt::Debug + PartialOrd>(
        low: T,
        high: T,
        mode: RangeMode,
    ) -> ArgMatcher {
        ArgMatcher::InRange {
            low: Box::new(low),
            high: Box::new(high),
            mode,
        }
    }
}
