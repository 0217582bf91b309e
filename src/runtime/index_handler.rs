// src/runtime/index_handler.rs
//
// Indexer invocation records. Indexers are unnamed and overloaded by index
// type, so records are keyed by a composite of index type, return type and
// index value rather than by member name.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use crate::runtime::value::{ArgValue, ReturnValue, TypeTag};

/// Composite key for one indexer slot.
#[derive(Debug)]
pub struct IndexKey {
    pub index_type: TypeTag,
    pub return_type: TypeTag,
    pub value: Box<dyn ArgValue>,
}

impl IndexKey {
    fn new<TReturn, TIndex>(index: TIndex) -> Self
    where
        TReturn: Any,
        TIndex: Any + fmt::Debug + PartialEq,
    {
        Self {
            index_type: TypeTag::of::<TIndex>(),
            return_type: TypeTag::of::<TReturn>(),
            value: Box::new(index),
        }
    }
}

impl PartialEq for IndexKey {
    fn eq(&self, other: &Self) -> bool {
        self.index_type == other.index_type
            && self.return_type == other.return_type
            && self.value.eq_value(other.value.as_ref())
    }
}

struct IndexRecord {
    key: IndexKey,
    calls: usize,
    value: Option<Box<dyn ReturnValue>>,
}

/// Stores indexer setups and routes get/set accesses to them by composite
/// key. A setter stores the assigned value under the key it writes, so an
/// unconfigured indexer behaves like a single-slot store per index value.
#[derive(Default)]
pub struct IndexInvocationHandler {
    records: Vec<IndexRecord>,
}

impl IndexInvocationHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or retrieve the record for an index value, typed by the element
    /// type the getter will be asked for.
    pub fn setup<TReturn, TIndex>(&mut self, index: TIndex) -> IndexSetup<'_, TReturn>
    where
        TReturn: Any,
        TIndex: Any + fmt::Debug + PartialEq,
    {
        let key = IndexKey::new::<TReturn, TIndex>(index);
        let record = self.record_for(key);
        IndexSetup {
            record,
            _return: PhantomData,
        }
    }

    /// Route a getter access. Yields the stored value, or `TReturn::default()`
    /// when nothing was configured or assigned under this key.
    pub fn get_index<TReturn, TIndex>(&mut self, index: TIndex) -> TReturn
    where
        TReturn: Any + Clone + Default,
        TIndex: Any + fmt::Debug + PartialEq,
    {
        let key = IndexKey::new::<TReturn, TIndex>(index);
        let record = self.record_for(key);
        record.calls += 1;
        tracing::trace!(index = ?record.key.value, calls = record.calls, "index get");
        match &record.value {
            // A &Box receiver selects the blanket impl; deref to the stored
            // trait object.
            Some(value) => match (**value).as_any().downcast_ref::<TReturn>() {
                Some(value) => value.clone(),
                None => panic!(
                    "value {:?} stored at index {:?} is not a {}",
                    value,
                    record.key.value,
                    std::any::type_name::<TReturn>()
                ),
            },
            None => TReturn::default(),
        }
    }

    /// Route a setter access: store the assigned value under the key formed
    /// by the index and the assigned value's type.
    pub fn set_index<TIndex, TValue>(&mut self, index: TIndex, value: TValue)
    where
        TIndex: Any + fmt::Debug + PartialEq,
        TValue: Any + fmt::Debug + Clone,
    {
        let key = IndexKey {
            index_type: TypeTag::of::<TIndex>(),
            return_type: TypeTag::of::<TValue>(),
            value: Box::new(index),
        };
        let record = self.record_for(key);
        record.calls += 1;
        tracing::trace!(index = ?record.key.value, calls = record.calls, "index set");
        record.value = Some(Box::new(value));
    }

    /// Accesses recorded under one composite key.
    pub fn calls<TReturn, TIndex>(&self, index: TIndex) -> usize
    where
        TReturn: Any,
        TIndex: Any + fmt::Debug + PartialEq,
    {
        let key = IndexKey::new::<TReturn, TIndex>(index);
        self.records
            .iter()
            .find(|record| record.key == key)
            .map_or(0, |record| record.calls)
    }

    fn record_for(&mut self, key: IndexKey) -> &mut IndexRecord {
        let index = self.records.iter().position(|record| record.key == key);
        match index {
            Some(index) => &mut self.records[index],
            None => {
                self.records.push(IndexRecord {
                    key,
                    calls: 0,
                    value: None,
                });
                let last = self.records.len() - 1;
                &mut self.records[last]
            }
        }
    }
}

/// Fluent configuration handle over one indexer record. Only a return value
/// can be configured for an indexer slot.
pub struct IndexSetup<'a, TReturn> {
    record: &'a mut IndexRecord,
    _return: PhantomData<TReturn>,
}

impl<TReturn: Any + fmt::Debug + Clone> IndexSetup<'_, TReturn> {
    /// Configure the value returned by getter accesses under this key.
    pub fn returns(self, value: TReturn) -> Self {
        self.record.value = Some(Box::new(value));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_index_returns_default() {
        let mut handler = IndexInvocationHandler::new();

        let text: String = handler.get_index("missing".to_string());
        assert_eq!(text, "");

        let number: i32 = handler.get_index(9);
        assert_eq!(number, 0);
    }

    #[test]
    fn setup_configures_value_for_one_index() {
        let mut handler = IndexInvocationHandler::new();
        handler.setup::<String, _>(2).returns("second".to_string());

        assert_eq!(handler.get_index::<String, _>(2), "second");
        assert_eq!(handler.get_index::<String, _>(3), "");
    }

    #[test]
    fn setter_round_trips_through_getter() {
        let mut handler = IndexInvocationHandler::new();

        handler.set_index(7, "seven".to_string());
        assert_eq!(handler.get_index::<String, _>(7), "seven");
    }

    #[test]
    fn stored_value_survives_repeated_reads() {
        let mut handler = IndexInvocationHandler::new();
        handler.setup::<String, _>(4).returns("four".to_string());

        assert_eq!(handler.get_index::<String, _>(4), "four");
        assert_eq!(handler.get_index::<String, _>(4), "four");
    }

    #[test]
    fn setter_overwrites_configured_value() {
        let mut handler = IndexInvocationHandler::new();
        handler.setup::<i32, _>("slot".to_string()).returns(1);

        handler.set_index("slot".to_string(), 2);
        assert_eq!(handler.get_index::<i32, _>("slot".to_string()), 2);
    }

    #[test]
    fn index_type_distinguishes_overloads() {
        let mut handler = IndexInvocationHandler::new();
        handler.setup::<String, i32>(1).returns("by int".to_string());

        // Same numeric value, different index type: separate slot.
        assert_eq!(handler.get_index::<String, i64>(1), "");
        assert_eq!(handler.get_index::<String, i32>(1), "by int");
    }

    #[test]
    fn return_type_distinguishes_slots() {
        let mut handler = IndexInvocationHandler::new();
        handler.setup::<i32, _>(1).returns(9);

        assert_eq!(handler.get_index::<String, _>(1), "");
        assert_eq!(handler.get_index::<i32, _>(1), 9);
    }

    #[test]
    fn calls_count_per_key() {
        let mut handler = IndexInvocationHandler::new();

        handler.set_index(1, "one".to_string());
        let _: String = handler.get_index(1);
        let _: String = handler.get_index(2);

        assert_eq!(handler.calls::<String, _>(1), 2);
        assert_eq!(handler.calls::<String, _>(2), 1);
        assert_eq!(handler.calls::<String, _>(3), 0);
    }
}
