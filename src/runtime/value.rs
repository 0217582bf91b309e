// src/runtime/value.rs
//
// Dynamically typed call-site values. Recorded arguments and configured
// return values cross the handler boundary as trait objects; downcasting
// recovers the concrete type at the use site.

use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::fmt;

/// A recorded call-site argument: any debuggable, comparable value.
pub trait ArgValue: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    /// Equality across trait objects. Values of different concrete types are
    /// never equal.
    fn eq_value(&self, other: &dyn ArgValue) -> bool;
}

impl<T: Any + fmt::Debug + PartialEq> ArgValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_value(&self, other: &dyn ArgValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

/// An argument value that additionally supports ordering, for range matchers.
pub trait OrdValue: ArgValue {
    /// Compare against another trait object. `None` when the concrete types
    /// differ or the underlying comparison is partial.
    fn partial_cmp_value(&self, other: &dyn ArgValue) -> Option<Ordering>;

    fn as_arg_value(&self) -> &dyn ArgValue;
}

impl<T: Any + fmt::Debug + PartialOrd> OrdValue for T {
    fn partial_cmp_value(&self, other: &dyn ArgValue) -> Option<Ordering> {
        other
            .as_any()
            .downcast_ref::<T>()
            .and_then(|other| self.partial_cmp(other))
    }

    fn as_arg_value(&self) -> &dyn ArgValue {
        self
    }
}

/// A configured return value. Cloned out on every matching call, so the
/// record keeps ownership across repeated invocations.
pub trait ReturnValue: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    fn clone_boxed(&self) -> Box<dyn ReturnValue>;
}

impl<T: Any + fmt::Debug + Clone> ReturnValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_boxed(&self) -> Box<dyn ReturnValue> {
        Box::new(self.clone())
    }
}

/// Runtime type identity paired with a readable name for diagnostics.
/// Equality is by type id only; the name is display metadata.
#[derive(Debug, Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether a value's concrete type is the tagged type.
    pub fn matches_value(&self, value: &dyn ArgValue) -> bool {
        self.id == value.as_any().type_id()
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Box a call-site argument for recording.
pub fn arg<T: Any + fmt::Debug + PartialEq>(value: T) -> Box<dyn ArgValue> {
    Box::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_value_compares_same_type() {
        let a = arg(42);
        let b = arg(42);
        let c = arg(7);

        assert!(a.eq_value(b.as_ref()));
        assert!(!a.eq_value(c.as_ref()));
    }

    #[test]
    fn eq_value_rejects_different_types() {
        let number = arg(42i32);
        let text = arg("42".to_string());

        assert!(!number.eq_value(text.as_ref()));
    }

    #[test]
    fn partial_cmp_value_orders_same_type() {
        let low: Box<dyn OrdValue> = Box::new(3);

        assert_eq!(low.partial_cmp_value(arg(5).as_ref()), Some(Ordering::Less));
        assert_eq!(
            low.partial_cmp_value(arg(3).as_ref()),
            Some(Ordering::Equal)
        );
        assert_eq!(low.partial_cmp_value(arg("five".to_string()).as_ref()), None);
    }

    #[test]
    fn type_tag_equality_ignores_name() {
        assert_eq!(TypeTag::of::<i32>(), TypeTag::of::<i32>());
        assert_ne!(TypeTag::of::<i32>(), TypeTag::of::<i64>());
        assert!(TypeTag::of::<String>().name().contains("String"));
    }

    #[test]
    fn type_tag_matches_concrete_value() {
        let tag = TypeTag::of::<bool>();

        assert!(tag.matches_value(arg(true).as_ref()));
        assert!(!tag.matches_value(arg(1u8).as_ref()));
    }

    #[test]
    fn return_value_clones_through_trait_object() {
        let stored: Box<dyn ReturnValue> = Box::new("hello".to_string());
        let cloned = stored.clone_boxed();

        let text = cloned.as_any().downcast_ref::<String>();
        assert_eq!(text, Some(&"hello".to_string()));
    }
}
