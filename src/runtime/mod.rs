// src/runtime/mod.rs
//
// Invocation routing runtime. Generated mock bodies forward every member
// access here; tests configure return values and side effects, then assert
// on recorded call counts.

pub mod context;
pub mod index_handler;
pub mod matcher;
pub mod method_handler;
pub mod property_handler;
pub mod received;
pub mod value;

pub use context::SubstitutionContext;
pub use index_handler::{IndexInvocationHandler, IndexKey, IndexSetup};
pub use matcher::{Arg, ArgMatcher, RangeMode};
pub use method_handler::{MethodInvocationHandler, MethodSetup};
pub use property_handler::{PropertyInvocationHandler, PropertySetup};
pub use received::Received;
pub use value::{ArgValue, OrdValue, ReturnValue, TypeTag, arg};
