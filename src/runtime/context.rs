// src/runtime/context.rs
//
// Facade over the three invocation handlers. A mock owns one context;
// generated member bodies route through it and tests configure and assert
// against it. Not synchronized: one context belongs to one test thread.

use std::any::Any;
use std::fmt;

use crate::runtime::index_handler::{IndexInvocationHandler, IndexSetup};
use crate::runtime::matcher::ArgMatcher;
use crate::runtime::method_handler::{MethodInvocationHandler, MethodSetup};
use crate::runtime::property_handler::{PropertyInvocationHandler, PropertySetup};
use crate::runtime::received::Received;
use crate::runtime::value::ArgValue;

/// Single entry point for a generated mock's members.
#[derive(Default)]
pub struct SubstitutionContext {
    methods: MethodInvocationHandler,
    properties: PropertyInvocationHandler,
    indexes: IndexInvocationHandler,
}

impl SubstitutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a void method call.
    pub fn method(&mut self, name: &str, args: Vec<Box<dyn ArgValue>>) {
        self.methods.handle(name, args);
    }

    /// Route a returning method call.
    pub fn method_returning<T>(&mut self, name: &str, args: Vec<Box<dyn ArgValue>>) -> T
    where
        T: Any + Clone + Default,
    {
        self.methods.handle_returning(name, args)
    }

    /// Route a property getter.
    pub fn get_property<T>(&mut self, name: &str) -> T
    where
        T: Any + Clone + Default,
    {
        self.properties.get(name)
    }

    /// Route a property setter.
    pub fn set_property<T>(&mut self, name: &str, value: T)
    where
        T: Any + fmt::Debug + Clone,
    {
        self.properties.set(name, value);
    }

    /// Route an indexer getter.
    pub fn get_index<TReturn, TIndex>(&mut self, index: TIndex) -> TReturn
    where
        TReturn: Any + Clone + Default,
        TIndex: Any + fmt::Debug + PartialEq,
    {
        self.indexes.get_index(index)
    }

    /// Route an indexer setter.
    pub fn set_index<TIndex, TValue>(&mut self, index: TIndex, value: TValue)
    where
        TIndex: Any + fmt::Debug + PartialEq,
        TValue: Any + fmt::Debug + Clone,
    {
        self.indexes.set_index(index, value);
    }

    /// Configure a method for calls matching the matcher list.
    pub fn setup_method(&mut self, name: &str, matchers: Vec<ArgMatcher>) -> MethodSetup<'_> {
        self.methods.setup(name, matchers)
    }

    /// Configure a property by name.
    pub fn setup_property(&mut self, name: &str) -> PropertySetup<'_> {
        self.properties.setup(name)
    }

    /// Configure an indexer slot by index value.
    pub fn setup_index<TReturn, TIndex>(&mut self, index: TIndex) -> IndexSetup<'_, TReturn>
    where
        TReturn: Any,
        TIndex: Any + fmt::Debug + PartialEq,
    {
        self.indexes.setup(index)
    }

    /// Query recorded calls for a named member, methods and properties
    /// combined.
    pub fn received(&self, member: &str) -> Received {
        Received::new(
            member,
            self.methods.calls(member) + self.properties.calls(member),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::matcher::Arg;
    use crate::runtime::value::arg;

    #[test]
    fn routes_methods_properties_and_indexers_independently() {
        let mut context = SubstitutionContext::new();
        context.setup_method("GetCount", vec![Arg::is_any::<String>()]).returns(3);
        context.setup_property("Name").returns("widget".to_string());
        context.setup_index::<bool, _>(1).returns(true);

        let count: i32 = context.method_returning("GetCount", vec![arg("k".to_string())]);
        let name: String = context.get_property("Name");
        let flag: bool = context.get_index(1);

        assert_eq!(count, 3);
        assert_eq!(name, "widget");
        assert!(flag);
    }

    #[test]
    fn received_covers_methods_and_properties() {
        let mut context = SubstitutionContext::new();

        context.method("Ping", vec![]);
        context.method("Ping", vec![]);
        context.set_property("Name", "x".to_string());
        let _: String = context.get_property("Name");

        assert_eq!(context.received("Ping").calls(), 2);
        assert_eq!(context.received("Name").calls(), 2);
        assert_eq!(context.received("Missing").calls(), 0);
    }

    #[test]
    fn unconfigured_members_fall_back_to_defaults() {
        let mut context = SubstitutionContext::new();

        context.method("Ping", vec![]);
        let count: i32 = context.method_returning("GetCount", vec![]);
        let name: String = context.get_property("Name");
        let slot: i32 = context.get_index("key".to_string());

        assert_eq!(count, 0);
        assert_eq!(name, "");
        assert_eq!(slot, 0);
    }
}
