//! Name-to-value tables for enum-valued tokens
//!
//! Each enum type registers its names once through [`impl_named_enum!`]; the
//! table is built lazily on first lookup and shared for the life of the
//! process.

use std::collections::HashMap;

/// Enum whose values can be read from a token by name
pub trait NamedEnum: Copy + 'static {
    /// Name used in error messages
    const TYPE_NAME: &'static str;

    fn lookup() -> &'static EnumLookup<Self>;

    fn from_name(name: &str, ignore_case: bool) -> Option<Self> {
        Self::lookup().get(name, ignore_case)
    }
}

/// Exact and case-folded name tables for one enum type
#[derive(Debug, Clone)]
pub struct EnumLookup<T> {
    exact: HashMap<&'static str, T>,
    folded: HashMap<String, T>,
    names: Vec<&'static str>,
}

impl<T: Copy> EnumLookup<T> {
    /// Build the tables. When two names collide the first registered wins.
    pub fn new(entries: &[(&'static str, T)]) -> Self {
        let mut exact = HashMap::with_capacity(entries.len());
        let mut folded = HashMap::with_capacity(entries.len());
        let mut names = Vec::with_capacity(entries.len());

        for &(name, value) in entries {
            if exact.contains_key(name) {
                continue;
            }
            exact.insert(name, value);
            folded.entry(name.to_lowercase()).or_insert(value);
            names.push(name);
        }

        Self {
            exact,
            folded,
            names,
        }
    }

    pub fn get(&self, name: &str, ignore_case: bool) -> Option<T> {
        if let Some(value) = self.exact.get(name) {
            return Some(*value);
        }
        if ignore_case {
            return self.folded.get(&name.to_lowercase()).copied();
        }
        None
    }

    /// Registered names in registration order
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Register the names of an enum type for [`consume_enum`](crate::tokens::TokenStream::consume_enum).
///
/// ```ignore
/// impl_named_enum!(FieldLabel {
///     "optional" => FieldLabel::Optional,
///     "required" => FieldLabel::Required,
///     "repeated" => FieldLabel::Repeated,
/// });
/// ```
#[macro_export]
macro_rules! impl_named_enum {
    ($ty:ident { $($name:literal => $value:expr),+ $(,)? }) => {
        impl $crate::syntax::NamedEnum for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn lookup() -> &'static $crate::syntax::EnumLookup<Self> {
                static LOOKUP: ::std::sync::OnceLock<$crate::syntax::EnumLookup<$ty>> =
                    ::std::sync::OnceLock::new();
                LOOKUP.get_or_init(|| $crate::syntax::EnumLookup::new(&[$(($name, $value)),+]))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum OptimizeMode {
        Speed,
        CodeSize,
        LiteRuntime,
    }

    crate::impl_named_enum!(OptimizeMode {
        "SPEED" => OptimizeMode::Speed,
        "CODE_SIZE" => OptimizeMode::CodeSize,
        "LITE_RUNTIME" => OptimizeMode::LiteRuntime,
    });

    #[test]
    fn test_exact_and_case_insensitive_lookup() {
        assert_eq!(OptimizeMode::from_name("SPEED", false), Some(OptimizeMode::Speed));
        assert_eq!(OptimizeMode::from_name("speed", false), None);
        assert_eq!(OptimizeMode::from_name("speed", true), Some(OptimizeMode::Speed));
        assert_eq!(
            OptimizeMode::from_name("Lite_Runtime", true),
            Some(OptimizeMode::LiteRuntime)
        );
        assert_eq!(OptimizeMode::from_name("FAST", true), None);
    }

    #[test]
    fn test_table_is_built_once() {
        let first = OptimizeMode::lookup() as *const EnumLookup<OptimizeMode>;
        let second = OptimizeMode::lookup() as *const EnumLookup<OptimizeMode>;
        assert_eq!(first, second);
        assert_eq!(OptimizeMode::lookup().names(), &["SPEED", "CODE_SIZE", "LITE_RUNTIME"]);
        assert_eq!(OptimizeMode::TYPE_NAME, "OptimizeMode");
    }

    #[test]
    fn test_first_registration_wins_on_collision() {
        let lookup = EnumLookup::new(&[("Alpha", 1), ("ALPHA", 2), ("Alpha", 3)]);

        assert_eq!(lookup.get("Alpha", false), Some(1));
        assert_eq!(lookup.get("ALPHA", false), Some(2));
        assert_eq!(lookup.get("alpha", true), Some(1));
        assert_eq!(lookup.len(), 2);
    }
}
