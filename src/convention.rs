// src/convention.rs
//
// Names shared between the generator and the routing runtime. Generated
// source forwards to these members by name, so both sides read from this
// table and nowhere else.

/// Base class every generated mock extends. Hosts the substitution context.
pub const MOCK_BASE: &str = "MockBase";

/// Property on `MockBase` that exposes the routing facade.
pub const SUBSTITUTION_CONTEXT: &str = "SubstitutionContext";

/// Context member handling method invocations (void and value-returning).
pub const METHOD: &str = "Method";

/// Context member handling property reads.
pub const GET_PROPERTY: &str = "GetProperty";

/// Context member handling property writes.
pub const SET_PROPERTY: &str = "SetProperty";

/// Context member handling indexer reads.
pub const GET_INDEX: &str = "GetIndex";

/// Context member handling indexer writes.
pub const SET_INDEX: &str = "SetIndex";

/// Named argument label for the packed method-argument array.
pub const ARGUMENTS_LABEL: &str = "arguments";

/// Implicit setter parameter name in generated accessor bodies.
pub const VALUE_IDENT: &str = "value";

/// Leading character that marks an interface name.
pub const INTERFACE_MARKER: char = 'I';

/// Suffix appended to the stripped interface name to form the mock name.
pub const MOCK_SUFFIX: &str = "Mock";

/// Namespace segment appended to the original namespace for generated units.
pub const MOCKS_SEGMENT: &str = "Mocks";

/// Import added to every generated unit so the context types resolve.
pub const RUNTIME_NAMESPACE: &str = "Mimic.Runtime";

/// Class name of the generated registration unit.
pub const REGISTRY_CLASS: &str = "MockRegistry";

/// Method on the registry class that performs the registrations.
pub const REGISTRY_METHOD: &str = "Register";

/// Container abstraction the registry method receives.
pub const INJECTOR_TYPE: &str = "IInjector";

/// Parameter name for the injector in the registry method.
pub const INJECTOR_PARAM: &str = "injector";

/// Generic registration method invoked on the injector per mock pair.
pub const REGISTER_TYPE: &str = "RegisterType";
