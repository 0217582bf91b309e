// src/runtime/method_handler.rs
//
// Method invocation records. A record is created lazily by the first setup or
// the first call for a given (name, matcher list) shape, then mutated in
// place for the rest of the mock's lifetime.

use std::any::Any;
use std::fmt;

use crate::runtime::matcher::ArgMatcher;
use crate::runtime::value::{ArgValue, ReturnValue};

struct MethodRecord {
    name: String,
    matchers: Vec<ArgMatcher>,
    calls: usize,
    return_value: Option<Box<dyn ReturnValue>>,
    action: Option<Box<dyn FnMut()>>,
    fault: Option<String>,
}

impl MethodRecord {
    fn new(name: String, matchers: Vec<ArgMatcher>) -> Self {
        Self {
            name,
            matchers,
            calls: 0,
            return_value: None,
            action: None,
            fault: None,
        }
    }

    /// Positional match: every matcher accepts its argument and the counts
    /// agree.
    fn matches(&self, args: &[Box<dyn ArgValue>]) -> bool {
        self.matchers.len() == args.len()
            && self
                .matchers
                .iter()
                .zip(args)
                .all(|(matcher, arg)| matcher.matches(arg.as_ref()))
    }
}

/// Stores method setups and routes calls to them by name plus positional
/// argument matching. First matching record wins; a call nothing matches
/// creates its own record so assertions still see it.
#[derive(Default)]
pub struct MethodInvocationHandler {
    records: Vec<MethodRecord>,
}

impl MethodInvocationHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or retrieve the record for a call shape. Setups with equal
    /// matcher lists share one record, so repeated configuration is
    /// idempotent.
    pub fn setup(&mut self, name: &str, matchers: Vec<ArgMatcher>) -> MethodSetup<'_> {
        let index = self
            .records
            .iter()
            .position(|record| record.name == name && record.matchers == matchers);
        let index = match index {
            Some(index) => index,
            None => {
                self.records
                    .push(MethodRecord::new(name.to_string(), matchers));
                self.records.len() - 1
            }
        };
        MethodSetup {
            record: &mut self.records[index],
        }
    }

    /// Route a void call: count it, raise a configured fault, run a
    /// configured action.
    pub fn handle(&mut self, name: &str, args: Vec<Box<dyn ArgValue>>) {
        let record = self.record_for_call(name, args);
        record.calls += 1;
        tracing::trace!(member = %record.name, calls = record.calls, "method call");
        if let Some(message) = &record.fault {
            panic!("{message}");
        }
        if let Some(action) = &mut record.action {
            action();
        }
    }

    /// Route a returning call. Yields the configured value, or `T::default()`
    /// when no setup configured one.
    pub fn handle_returning<T>(&mut self, name: &str, args: Vec<Box<dyn ArgValue>>) -> T
    where
        T: Any + Clone + Default,
    {
        let record = self.record_for_call(name, args);
        record.calls += 1;
        tracing::trace!(member = %record.name, calls = record.calls, "method call");
        if let Some(message) = &record.fault {
            panic!("{message}");
        }
        if let Some(action) = &mut record.action {
            action();
        }
        match &record.return_value {
            // A &Box receiver selects the blanket impl; deref to the stored
            // trait object.
            Some(value) => match (**value).as_any().downcast_ref::<T>() {
                Some(value) => value.clone(),
                None => panic!(
                    "return value {:?} configured for '{}' is not a {}",
                    value,
                    record.name,
                    std::any::type_name::<T>()
                ),
            },
            None => T::default(),
        }
    }

    /// Total calls recorded under a member name, across all argument shapes.
    pub fn calls(&self, name: &str) -> usize {
        self.records
            .iter()
            .filter(|record| record.name == name)
            .map(|record| record.calls)
            .sum()
    }

    fn record_for_call(&mut self, name: &str, args: Vec<Box<dyn ArgValue>>) -> &mut MethodRecord {
        let index = self
            .records
            .iter()
            .position(|record| record.name == name && record.matches(&args));
        match index {
            Some(index) => &mut self.records[index],
            None => {
                // Unmatched calls record under literal-equality matchers.
                let matchers = args.into_iter().map(ArgMatcher::Exact).collect();
                self.records
                    .push(MethodRecord::new(name.to_string(), matchers));
                let last = self.records.len() - 1;
                &mut self.records[last]
            }
        }
    }
}

/// Fluent configuration handle over one method record.
pub struct MethodSetup<'a> {
    record: &'a mut MethodRecord,
}

impl MethodSetup<'_> {
    /// Configure the value returned by matching calls.
    pub fn returns<T: Any + fmt::Debug + Clone>(self, value: T) -> Self {
        self.record.return_value = Some(Box::new(value));
        self
    }

    /// Configure matching calls to panic with the given message.
    pub fn throws(self, message: impl Into<String>) -> Self {
        self.record.fault = Some(message.into());
        self
    }

    /// Configure a side effect run on every matching call.
    pub fn executes(self, action: impl FnMut() + 'static) -> Self {
        self.record.action = Some(Box::new(action));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::matcher::Arg;
    use crate::runtime::value::arg;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn unset_method_returns_default() {
        let mut handler = MethodInvocationHandler::new();

        let count: i32 = handler.handle_returning("GetCount", vec![]);
        assert_eq!(count, 0);

        let name: String = handler.handle_returning("GetName", vec![]);
        assert_eq!(name, "");
    }

    #[test]
    fn setup_configures_return_value() {
        let mut handler = MethodInvocationHandler::new();
        handler
            .setup("GetCount", vec![Arg::is("total".to_string())])
            .returns(7);

        let count: i32 = handler.handle_returning("GetCount", vec![arg("total".to_string())]);
        assert_eq!(count, 7);
    }

    #[test]
    fn configured_value_survives_repeated_reads() {
        let mut handler = MethodInvocationHandler::new();
        handler.setup("Describe", vec![]).returns("ready".to_string());

        // Each call clones out of the record; the stored value stays put.
        let first: String = handler.handle_returning("Describe", vec![]);
        let second: String = handler.handle_returning("Describe", vec![]);
        assert_eq!(first, "ready");
        assert_eq!(second, "ready");
        assert_eq!(handler.calls("Describe"), 2);
    }

    #[test]
    fn non_matching_arguments_fall_back_to_default() {
        let mut handler = MethodInvocationHandler::new();
        handler.setup("GetCount", vec![Arg::is(1)]).returns(10);

        let count: i32 = handler.handle_returning("GetCount", vec![arg(2)]);
        assert_eq!(count, 0);
    }

    #[test]
    fn argument_count_must_match() {
        let mut handler = MethodInvocationHandler::new();
        handler.setup("Sum", vec![Arg::is_any::<i32>()]).returns(99);

        let sum: i32 = handler.handle_returning("Sum", vec![arg(1), arg(2)]);
        assert_eq!(sum, 0);
    }

    #[test]
    fn first_matching_setup_wins() {
        let mut handler = MethodInvocationHandler::new();
        handler.setup("Lookup", vec![Arg::is(5)]).returns(50);
        handler
            .setup("Lookup", vec![Arg::is_any::<i32>()])
            .returns(1);

        let exact: i32 = handler.handle_returning("Lookup", vec![arg(5)]);
        let other: i32 = handler.handle_returning("Lookup", vec![arg(9)]);
        assert_eq!(exact, 50);
        assert_eq!(other, 1);
    }

    #[test]
    fn equivalent_setups_share_one_record() {
        let mut handler = MethodInvocationHandler::new();
        handler.setup("GetCount", vec![Arg::is(1)]).returns(10);
        handler.setup("GetCount", vec![Arg::is(1)]).returns(20);

        // Second setup reconfigured the same record rather than adding one.
        let count: i32 = handler.handle_returning("GetCount", vec![arg(1)]);
        assert_eq!(count, 20);

        handler.handle_returning::<i32>("GetCount", vec![arg(1)]);
        handler.handle_returning::<i32>("GetCount", vec![arg(1)]);
        assert_eq!(handler.calls("GetCount"), 3);
    }

    #[test]
    fn calls_aggregate_across_argument_shapes() {
        let mut handler = MethodInvocationHandler::new();

        handler.handle("Ping", vec![]);
        handler.handle("Ping", vec![arg(1)]);
        handler.handle("Ping", vec![arg(2)]);
        handler.handle("Pong", vec![]);

        assert_eq!(handler.calls("Ping"), 3);
        assert_eq!(handler.calls("Pong"), 1);
        assert_eq!(handler.calls("Missing"), 0);
    }

    #[test]
    fn repeated_unmatched_calls_share_a_record() {
        let mut handler = MethodInvocationHandler::new();

        handler.handle("Ping", vec![arg(5)]);
        handler.handle("Ping", vec![arg(5)]);

        // The first call's literal-equality record catches the second.
        assert_eq!(handler.calls("Ping"), 2);
    }

    #[test]
    fn executes_runs_side_effect_per_call() {
        let mut handler = MethodInvocationHandler::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        handler
            .setup("Ping", vec![])
            .executes(move || counter.set(counter.get() + 1));

        handler.handle("Ping", vec![]);
        handler.handle("Ping", vec![]);

        assert_eq!(hits.get(), 2);
    }

    #[test]
    #[should_panic(expected = "widget offline")]
    fn throws_panics_on_matching_call() {
        let mut handler = MethodInvocationHandler::new();
        handler.setup("Ping", vec![]).throws("widget offline");

        handler.handle("Ping", vec![]);
    }

    #[test]
    #[should_panic(expected = "is not a i32")]
    fn mismatched_return_type_fails_loudly() {
        let mut handler = MethodInvocationHandler::new();
        handler
            .setup("GetCount", vec![])
            .returns("seven".to_string());

        let _: i32 = handler.handle_returning("GetCount", vec![]);
    }

    #[test]
    fn fluent_calls_chain() {
        let mut handler = MethodInvocationHandler::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        handler
            .setup("Fetch", vec![Arg::is_any::<String>()])
            .executes(move || counter.set(counter.get() + 1))
            .returns(3);

        let got: i32 = handler.handle_returning("Fetch", vec![arg("key".to_string())]);
        assert_eq!(got, 3);
        assert_eq!(hits.get(), 1);
    }
}
