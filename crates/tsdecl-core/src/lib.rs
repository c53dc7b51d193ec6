#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Host type metadata model for tsdecl.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to reflection dump JSON
//! - **Analysis layer**: ID-indexed `TypeModel` for efficient lookups
//!
//! A reflection dump is produced on the host side by walking its runtime
//! type metadata (one JSON array of type declarations); this crate never
//! talks to a live host. Types the dump references without declaring
//! (host built-ins like `System.Int32`) intern as implicit entries of
//! primitive kind.

use indexmap::IndexMap;

pub mod utils;


/// Interned name of the host's may-be-absent wrapper.
const OPTIONAL_WRAPPER: &str = "System.Nullable";

// ============================================================================
// Deserialization Layer
// ============================================================================

/// Raw type declaration from a reflection dump.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawTypeDecl {
    #[serde(rename = "type")]
    pub type_name: String,
    pub kind: RawKind,
    /// Host value-type marker. Defaults to true for enums, false otherwise.
    pub value: Option<bool>,
    pub extends: Option<RawTypeUse>,
    #[serde(default)]
    pub properties: Vec<RawProperty>,
    #[serde(default)]
    pub methods: Vec<RawMethod>,
    #[serde(default)]
    pub members: Vec<RawEnumMember>,
}

/// Declared kind of a dumped type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawKind {
    Class,
    Interface,
    Enum,
}

/// Raw property row.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub type_use: RawTypeUse,
    /// Whether the property is publicly readable.
    #[serde(default = "default_true")]
    pub public: bool,
    #[serde(rename = "static", default)]
    pub is_static: bool,
}

/// Raw method row.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawMethod {
    pub name: String,
    pub returns: RawTypeUse,
    #[serde(default)]
    pub params: Vec<RawParam>,
    #[serde(default = "default_true")]
    pub public: bool,
    #[serde(rename = "static", default)]
    pub is_static: bool,
    /// Compiler-synthesized accessor (property getter/setter machinery).
    #[serde(default)]
    pub synthesized: bool,
}

/// Raw method parameter.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawParam {
    pub name: String,
    #[serde(rename = "type")]
    pub type_use: RawTypeUse,
}

/// Raw enum member row.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawEnumMember {
    pub name: String,
    pub value: i64,
}

/// Reference to a type as it appears in member positions.
///
/// Either a plain qualified name or one structured form. The dumping side
/// vouches for a constructed generic's structural `shape` (whether it is
/// associative, a may-be-absent wrapper, or a homogeneous sequence).
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
pub enum RawTypeUse {
    /// Plain qualified name, e.g. `"System.String"`.
    Name(String),
    /// Host array type.
    Array { array: Box<RawTypeUse> },
    /// The host's may-be-absent wrapper applied to an argument.
    Optional { optional: Box<RawTypeUse> },
    /// Constructed generic instance.
    Generic {
        generic: String,
        #[serde(default)]
        shape: RawShape,
        #[serde(default)]
        args: Vec<RawTypeUse>,
    },
}

/// Structural shape of a constructed generic, as dumped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawShape {
    Map,
    Optional,
    Sequence,
    #[default]
    Other,
}

fn default_true() -> bool {
    true
}

/// Parse reflection dump content into raw type declarations.
pub fn parse_type_dump(json: &str) -> Result<Vec<RawTypeDecl>, serde_json::Error> {
    serde_json::from_str(json)
}

// ============================================================================
// Analysis Layer
// ============================================================================

/// Type ID: index of an entry in a `TypeModel`.
pub type TypeId = u32;

/// Classified kind of a type entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    /// Host built-in or any referenced-but-undeclared name.
    Primitive,
    /// Constructed generic or array (carries `GenericInstance` data).
    Generic,
}

/// Structural shape of a constructed generic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenericShape {
    /// Two-argument associative (dictionary) generic.
    Map,
    /// One-argument may-be-absent wrapper.
    Optional,
    /// Array, or one-argument generic that is a homogeneous sequence.
    Sequence,
    Other,
}

/// Constructed-generic data for a generic-kind entry.
#[derive(Debug, Clone)]
pub struct GenericInstance {
    pub shape: GenericShape,
    pub args: Vec<TypeId>,
}

/// A property in host declaration order.
#[derive(Debug, Clone)]
pub struct Property {
    pub name: String,
    pub ty: TypeId,
    pub public: bool,
    pub is_static: bool,
}

/// A method parameter in host declaration order.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: TypeId,
}

/// A method in host declaration order.
#[derive(Debug, Clone)]
pub struct Method {
    pub name: String,
    pub returns: TypeId,
    pub params: Vec<Param>,
    pub public: bool,
    pub is_static: bool,
    pub synthesized: bool,
}

/// An enum member in host declaration order.
#[derive(Debug, Clone)]
pub struct EnumMember {
    pub name: String,
    pub value: i64,
}

/// Complete information about one type entry.
///
/// For generic-kind entries `qualified_name` is the definition's name
/// (arrays use `<element>[]`); identity of distinct instantiations is
/// carried by the `TypeId`, not the name.
#[derive(Debug, Clone)]
pub struct TypeInfo {
    pub qualified_name: String,
    pub kind: TypeKind,
    pub value_type: bool,
    pub base: Option<TypeId>,
    pub properties: Vec<Property>,
    pub methods: Vec<Method>,
    pub enum_members: Vec<EnumMember>,
    pub generic: Option<GenericInstance>,
}

/// Interned, read-only view of one reflection dump.
///
/// Every declared type and every distinct type use gets a `TypeId`;
/// structurally identical uses resolve to the same ID.
#[derive(Debug, Clone, Default)]
pub struct TypeModel {
    infos: Vec<TypeInfo>,
    ids: IndexMap<String, TypeId>,
}

impl TypeModel {
    /// Parse and build in one step.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::build(&parse_type_dump(json)?))
    }

    /// Build a model from raw declarations.
    ///
    /// Declared names are interned before any member is resolved, so
    /// mutually recursive declarations work in any order. A later
    /// declaration of an already-declared name replaces the earlier one.
    pub fn build(decls: &[RawTypeDecl]) -> Self {
        let mut model = TypeModel::default();

        for decl in decls {
            let id = model.intern_name(&decl.type_name);
            let info = &mut model.infos[id as usize];
            info.kind = match decl.kind {
                RawKind::Class => TypeKind::Class,
                RawKind::Interface => TypeKind::Interface,
                RawKind::Enum => TypeKind::Enum,
            };
            info.value_type = decl.value.unwrap_or(decl.kind == RawKind::Enum);
        }

        for decl in decls {
            let base = decl.extends.as_ref().map(|b| model.intern_use(b));
            let properties: Vec<Property> = decl
                .properties
                .iter()
                .map(|p| Property {
                    name: p.name.clone(),
                    ty: model.intern_use(&p.type_use),
                    public: p.public,
                    is_static: p.is_static,
                })
                .collect();
            let methods: Vec<Method> = decl
                .methods
                .iter()
                .map(|m| Method {
                    name: m.name.clone(),
                    returns: model.intern_use(&m.returns),
                    params: m
                        .params
                        .iter()
                        .map(|p| Param {
                            name: p.name.clone(),
                            ty: model.intern_use(&p.type_use),
                        })
                        .collect(),
                    public: m.public,
                    is_static: m.is_static,
                    synthesized: m.synthesized,
                })
                .collect();
            let enum_members: Vec<EnumMember> = decl
                .members
                .iter()
                .map(|m| EnumMember {
                    name: m.name.clone(),
                    value: m.value,
                })
                .collect();

            let id = model.intern_name(&decl.type_name);
            let info = &mut model.infos[id as usize];
            info.base = base;
            info.properties = properties;
            info.methods = methods;
            info.enum_members = enum_members;
        }

        model
    }

    /// Resolve a qualified name (or canonical use key) to its ID.
    pub fn lookup(&self, qualified_name: &str) -> Option<TypeId> {
        self.ids.get(qualified_name).copied()
    }

    /// Info for an entry. Panics if `id` was not minted by this model.
    pub fn info(&self, id: TypeId) -> &TypeInfo {
        &self.infos[id as usize]
    }

    pub fn types(&self) -> impl Iterator<Item = (TypeId, &TypeInfo)> {
        self.infos
            .iter()
            .enumerate()
            .map(|(i, info)| (i as TypeId, info))
    }

    pub fn len(&self) -> usize {
        self.infos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }

    /// Intern a plain name; unknown names become implicit primitive entries.
    fn intern_name(&mut self, name: &str) -> TypeId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        self.push_entry(
            name.to_string(),
            TypeInfo {
                qualified_name: name.to_string(),
                kind: TypeKind::Primitive,
                value_type: true,
                base: None,
                properties: Vec::new(),
                methods: Vec::new(),
                enum_members: Vec::new(),
                generic: None,
            },
        )
    }

    /// Intern a type use, creating generic/array entries as needed.
    fn intern_use(&mut self, type_use: &RawTypeUse) -> TypeId {
        if let RawTypeUse::Name(name) = type_use {
            return self.intern_name(name);
        }

        let key = use_key(type_use);
        if let Some(&id) = self.ids.get(&key) {
            return id;
        }

        let (qualified_name, shape, args) = match type_use {
            RawTypeUse::Name(_) => unreachable!("handled above"),
            RawTypeUse::Array { array } => {
                let elem = self.intern_use(array);
                let qualified = format!("{}[]", self.infos[elem as usize].qualified_name);
                (qualified, GenericShape::Sequence, vec![elem])
            }
            RawTypeUse::Optional { optional } => {
                let arg = self.intern_use(optional);
                (OPTIONAL_WRAPPER.to_string(), GenericShape::Optional, vec![arg])
            }
            RawTypeUse::Generic {
                generic,
                shape,
                args,
            } => {
                let args = args.iter().map(|a| self.intern_use(a)).collect();
                let shape = match shape {
                    RawShape::Map => GenericShape::Map,
                    RawShape::Optional => GenericShape::Optional,
                    RawShape::Sequence => GenericShape::Sequence,
                    RawShape::Other => GenericShape::Other,
                };
                (generic.clone(), shape, args)
            }
        };

        self.push_entry(
            key,
            TypeInfo {
                qualified_name,
                kind: TypeKind::Generic,
                value_type: false,
                base: None,
                properties: Vec::new(),
                methods: Vec::new(),
                enum_members: Vec::new(),
                generic: Some(GenericInstance { shape, args }),
            },
        )
    }

    fn push_entry(&mut self, key: String, info: TypeInfo) -> TypeId {
        let id = self.infos.len() as TypeId;
        self.ids.insert(key, id);
        self.infos.push(info);
        id
    }
}

/// Canonical intern key for a type use. Structurally identical uses get
/// identical keys; generic keys include arguments, unlike display names.
fn use_key(type_use: &RawTypeUse) -> String {
    match type_use {
        RawTypeUse::Name(name) => name.clone(),
        RawTypeUse::Array { array } => format!("{}[]", use_key(array)),
        RawTypeUse::Optional { optional } => {
            format!("{}<{}>", OPTIONAL_WRAPPER, use_key(optional))
        }
        RawTypeUse::Generic { generic, args, .. } => {
            let args: Vec<String> = args.iter().map(use_key).collect();
            format!("{}<{}>", generic, args.join(","))
        }
    }
}
