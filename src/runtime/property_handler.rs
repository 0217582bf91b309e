// src/runtime/property_handler.rs
//
// Property invocation records, keyed by member name. Both accessors of a
// property count against the same record; a setter overwrites the record's
// value, so an unconfigured property behaves like an auto-property.

use rustc_hash::FxHashMap;
use std::any::Any;
use std::fmt;

use crate::runtime::value::ReturnValue;

#[derive(Default)]
struct PropertyRecord {
    calls: usize,
    value: Option<Box<dyn ReturnValue>>,
    fault: Option<String>,
}

/// Stores property setups and routes get/set accesses to them by name.
#[derive(Default)]
pub struct PropertyInvocationHandler {
    records: FxHashMap<String, PropertyRecord>,
}

impl PropertyInvocationHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or retrieve the record for a property name.
    pub fn setup(&mut self, name: &str) -> PropertySetup<'_> {
        PropertySetup {
            record: self.records.entry(name.to_string()).or_default(),
        }
    }

    /// Route a getter access. Yields the stored value, or `T::default()` when
    /// nothing was configured or assigned.
    pub fn get<T>(&mut self, name: &str) -> T
    where
        T: Any + Clone + Default,
    {
        let record = self.records.entry(name.to_string()).or_default();
        record.calls += 1;
        tracing::trace!(member = %name, calls = record.calls, "property get");
        if let Some(message) = &record.fault {
            panic!("{message}");
        }
        match &record.value {
            // A &Box receiver selects the blanket impl; deref to the stored
            // trait object.
            Some(value) => match (**value).as_any().downcast_ref::<T>() {
                Some(value) => value.clone(),
                None => panic!(
                    "value {:?} stored for property '{}' is not a {}",
                    value,
                    name,
                    std::any::type_name::<T>()
                ),
            },
            None => T::default(),
        }
    }

    /// Route a setter access: store the assigned value as the record's value.
    pub fn set<T>(&mut self, name: &str, value: T)
    where
        T: Any + fmt::Debug + Clone,
    {
        let record = self.records.entry(name.to_string()).or_default();
        record.calls += 1;
        tracing::trace!(member = %name, calls = record.calls, "property set");
        record.value = Some(Box::new(value));
    }

    /// Total accesses recorded under a property name, getters and setters
    /// combined.
    pub fn calls(&self, name: &str) -> usize {
        self.records.get(name).map_or(0, |record| record.calls)
    }
}

/// Fluent configuration handle over one property record.
pub struct PropertySetup<'a> {
    record: &'a mut PropertyRecord,
}

impl PropertySetup<'_> {
    /// Configure the value returned by the getter.
    pub fn returns<T: Any + fmt::Debug + Clone>(self, value: T) -> Self {
        self.record.value = Some(Box::new(value));
        self
    }

    /// Configure getter accesses to panic with the given message.
    pub fn throws(self, message: impl Into<String>) -> Self {
        self.record.fault = Some(message.into());
        self
    }
}
