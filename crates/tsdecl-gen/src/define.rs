//! Normalized records produced by discovery.
//!
//! A [`Define`] is the render-ready description of one discovered type:
//! its position in the namespace tree plus exactly one body shape. All
//! type references inside a record are already mapped to declaration
//! expressions, so rendering is pure text assembly.

/// One discovered type, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Define {
    /// Dot-joined namespace; empty for the global namespace.
    pub namespace: String,
    /// Short type name without namespace segments.
    pub name: String,
    pub body: DefineBody,
}

/// The two mutually exclusive body shapes a record can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefineBody {
    /// Class or interface: properties first, then methods.
    Members {
        properties: Vec<Property>,
        methods: Vec<Method>,
    },
    /// Enum: name/value members in declared order.
    Enum { members: Vec<EnumMember> },
}

/// A property row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub type_expr: String,
}

/// A method row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub params: Vec<Param>,
    pub return_expr: String,
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub type_expr: String,
}

/// An enum member row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub name: String,
    pub value: i64,
}
