//! Dynamic attribute dispatch workload.
//!
//! One receiver with twenty numbered fields and twenty explicit accessor
//! methods. Calls are routed by attribute name: a method table of the
//! explicit accessors is consulted first, and names of the form
//! `method<N>` with no explicit entry fall back to reading field N.
//! Explicit entries always shadow the fallback, so the benchmark's fixed
//! call sequence never reaches it.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Number of fields (and explicit accessor methods) on [`DispatchObject`].
pub const FIELD_COUNT: usize = 20;

/// The twenty explicit method names in ascending numeric order; the fixed
/// call sequence of the dispatch benchmark's main loop.
pub const METHOD_NAMES: [&str; FIELD_COUNT] = [
    "method1", "method2", "method3", "method4", "method5", "method6", "method7", "method8",
    "method9", "method10", "method11", "method12", "method13", "method14", "method15", "method16",
    "method17", "method18", "method19", "method20",
];

/// Attribute resolution failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// Neither an explicit method nor a field matches the requested name.
    #[error("AttributeError: {0}")]
    AttributeNotFound(String),
}

type Accessor = fn(&DispatchObject) -> i64;

/// Receiver for the dispatch benchmark: twenty numeric fields, all 1.
///
/// No accessor mutates, so every routed call observes the initial value.
#[derive(Debug)]
pub struct DispatchObject {
    fields: [i64; FIELD_COUNT],
}

macro_rules! accessors {
    ($($method:ident => $index:literal),* $(,)?) => {
        impl DispatchObject {
            $(
                #[doc = concat!("Explicit accessor reading field ", stringify!($index), ".")]
                pub fn $method(&self) -> i64 {
                    self.fields[$index - 1]
                }
            )*

            fn method_table() -> &'static FxHashMap<&'static str, Accessor> {
                static TABLE: OnceLock<FxHashMap<&'static str, Accessor>> = OnceLock::new();
                TABLE.get_or_init(|| {
                    let mut table = FxHashMap::default();
                    $(table.insert(stringify!($method), Self::$method as Accessor);)*
                    table
                })
            }
        }
    };
}

accessors! {
    method1 => 1, method2 => 2, method3 => 3, method4 => 4, method5 => 5,
    method6 => 6, method7 => 7, method8 => 8, method9 => 9, method10 => 10,
    method11 => 11, method12 => 12, method13 => 13, method14 => 14, method15 => 15,
    method16 => 16, method17 => 17, method18 => 18, method19 => 19, method20 => 20,
}

impl DispatchObject {
    /// Create the receiver with every field initialized to 1.
    pub fn new() -> Self {
        Self {
            fields: [1; FIELD_COUNT],
        }
    }

    /// Read field `index` (1-based). `None` outside `1..=FIELD_COUNT`.
    pub fn field(&self, index: usize) -> Option<i64> {
        (1..=FIELD_COUNT)
            .contains(&index)
            .then(|| self.fields[index - 1])
    }

    /// Route a call by attribute name.
    ///
    /// Explicit methods take precedence; unmatched `method<N>` names resolve
    /// through [`DispatchObject::field`]; anything else is an unknown
    /// attribute.
    pub fn call(&self, name: &str) -> Result<i64, DispatchError> {
        if let Some(accessor) = Self::method_table().get(name) {
            return Ok(accessor(self));
        }
        self.fallback(name)
    }

    // Unmatched `method<suffix>` reads `field<suffix>`, failing the same way
    // a direct read of a missing field would.
    fn fallback(&self, name: &str) -> Result<i64, DispatchError> {
        if let Some(suffix) = name.strip_prefix("method") {
            let value = suffix.parse::<usize>().ok().and_then(|i| self.field(i));
            return value.ok_or_else(|| DispatchError::AttributeNotFound(format!("field{suffix}")));
        }
        Err(DispatchError::AttributeNotFound(name.to_string()))
    }
}

impl Default for DispatchObject {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names_are_ascending() {
        for (i, name) in METHOD_NAMES.iter().enumerate() {
            assert_eq!(*name, format!("method{}", i + 1));
        }
    }

    #[test]
    fn explicit_methods_return_field_values() {
        let object = DispatchObject::new();
        assert_eq!(object.method1(), 1);
        assert_eq!(object.method20(), 1);
        for n in 1..=FIELD_COUNT {
            let routed = object.call(&format!("method{n}")).unwrap();
            assert_eq!(Some(routed), object.field(n));
            assert_eq!(routed, 1);
        }
    }

    #[test]
    fn full_call_sequence_yields_ones() {
        let object = DispatchObject::new();
        for name in METHOD_NAMES {
            assert_eq!(object.call(name), Ok(1));
        }
    }

    // "method07" is not an explicit method name, so it exercises the
    // fallback, which still lands on field 7.
    #[test]
    fn fallback_resolves_numbered_fields() {
        let object = DispatchObject::new();
        assert_eq!(object.call("method07"), Ok(1));
    }

    #[test]
    fn fallback_rejects_out_of_range_fields() {
        let object = DispatchObject::new();
        assert_eq!(
            object.call("method21"),
            Err(DispatchError::AttributeNotFound("field21".into()))
        );
        assert_eq!(
            object.call("methodx"),
            Err(DispatchError::AttributeNotFound("fieldx".into()))
        );
    }

    #[test]
    fn unknown_attributes_are_rejected() {
        let object = DispatchObject::new();
        let err = object.call("missing").unwrap_err();
        assert_eq!(err.to_string(), "AttributeError: missing");
    }

    #[test]
    fn field_bounds() {
        let object = DispatchObject::new();
        assert_eq!(object.field(0), None);
        assert_eq!(object.field(1), Some(1));
        assert_eq!(object.field(FIELD_COUNT), Some(1));
        assert_eq!(object.field(FIELD_COUNT + 1), None);
    }
}
