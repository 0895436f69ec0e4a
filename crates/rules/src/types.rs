//! Type resolution for assignability conditions.

use std::collections::{HashMap, HashSet, VecDeque};

/// Root of every class hierarchy; every type is assignable to it.
pub const OBJECT: &str = "java.lang.Object";

/// Class or interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// A concrete or abstract class.
    Class,
    /// An interface.
    Interface,
}

/// What the type oracle knows about one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredType {
    name: String,
    kind: TypeKind,
    superclass: Option<String>,
    interfaces: Vec<String>,
}

impl DeclaredType {
    /// A class extending `java.lang.Object`.
    pub fn class(name: impl Into<String>) -> Self {
        let name = name.into();
        let superclass = (name != OBJECT).then(|| OBJECT.to_owned());
        Self {
            name,
            kind: TypeKind::Class,
            superclass,
            interfaces: Vec::new(),
        }
    }

    /// An interface with no super-interfaces.
    pub fn interface(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Interface,
            superclass: None,
            interfaces: Vec::new(),
        }
    }

    /// Set the superclass. Ignored for interfaces.
    pub fn extends(mut self, superclass: impl Into<String>) -> Self {
        if self.kind == TypeKind::Class {
            self.superclass = Some(superclass.into());
        } else {
            self.interfaces.push(superclass.into());
        }
        self
    }

    /// Add an implemented (or, for interfaces, extended) interface.
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Fully qualified name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class or interface.
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Direct superclass, `None` for interfaces and `java.lang.Object`.
    pub fn superclass(&self) -> Option<&str> {
        self.superclass.as_deref()
    }

    /// Directly implemented or extended interfaces.
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    fn supertypes(&self) -> impl Iterator<Item = &str> {
        self.superclass
            .as_deref()
            .into_iter()
            .chain(self.interfaces.iter().map(String::as_str))
    }
}

/// Resolves type names to declarations.
///
/// Absence is reported as `None`; deciding whether that is fatal is the
/// caller's business.
pub trait TypeOracle {
    /// Look up a type by fully qualified name.
    fn find_type(&self, name: &str) -> Option<&DeclaredType>;

    /// Whether a value of type `from` can be used where `to` is expected.
    ///
    /// Reflexive; everything is assignable to `java.lang.Object`. Supertypes
    /// the oracle cannot resolve end that branch of the walk.
    fn is_assignable(&self, from: &DeclaredType, to: &DeclaredType) -> bool {
        if from.name() == to.name() || to.name() == OBJECT {
            return true;
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&DeclaredType> = VecDeque::from([from]);
        while let Some(current) = queue.pop_front() {
            for sup in current.supertypes() {
                if sup == to.name() {
                    return true;
                }
                if seen.insert(sup)
                    && let Some(next) = self.find_type(sup)
                {
                    queue.push_back(next);
                }
            }
        }
        false
    }
}

/// In-memory [`TypeOracle`], seeded with `java.lang.Object`.
///
/// ```
/// use rebind_rules::{DeclaredType, TypeOracle, TypeRegistry};
///
/// let mut types = TypeRegistry::new();
/// types.insert(DeclaredType::interface("java.io.Serializable"));
/// types.insert(DeclaredType::class("com.foo.Bean").implements("java.io.Serializable"));
///
/// let bean = types.find_type("com.foo.Bean").unwrap();
/// let ser = types.find_type("java.io.Serializable").unwrap();
/// assert!(types.is_assignable(bean, ser));
/// ```
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: HashMap<String, DeclaredType>,
}

impl TypeRegistry {
    /// A registry containing only `java.lang.Object`.
    pub fn new() -> Self {
        let mut types = HashMap::new();
        types.insert(OBJECT.to_owned(), DeclaredType::class(OBJECT));
        Self { types }
    }

    /// Add or replace a declaration.
    pub fn insert(&mut self, ty: DeclaredType) -> &mut Self {
        self.types.insert(ty.name.clone(), ty);
        self
    }

    /// Whether a type is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Number of declared types, `java.lang.Object` included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always false: `java.lang.Object` is always present.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeOracle for TypeRegistry {
    fn find_type(&self, name: &str) -> Option<&DeclaredType> {
        self.types.get(name)
    }
}
