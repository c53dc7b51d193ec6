//! Type-expression mapping.
//!
//! Turns one interned type reference into one declaration expression.
//! Composite references (user classes, interfaces, enums) come out as a
//! bare name and are enqueued for extraction as a side effect, which is
//! what drives the closure walk forward.

use tsdecl_core::{GenericShape, TypeId};

use crate::generator::Generator;
use crate::namespace;

/// Fixed mapping from host built-ins to output primitives. The only
/// hard-coded knowledge of the host's built-in type set.
pub(crate) fn primitive_expr(qualified: &str) -> Option<&'static str> {
    Some(match qualified {
        "System.String" | "System.Char" => "string",
        "System.Byte" | "System.SByte" | "System.Int16" | "System.UInt16" | "System.Int32"
        | "System.UInt32" | "System.Int64" | "System.UInt64" | "System.Single"
        | "System.Double" | "System.Decimal" => "number",
        "System.Boolean" => "boolean",
        "System.Object" => "any",
        "System.Void" => "void",
        _ => return None,
    })
}

impl Generator<'_> {
    /// Full resolver for member positions. Rules apply in order: primitive
    /// table, index signature, may-be-absent unwrap (`|null`), sequence
    /// unwrap (`[]`), composite fallback.
    ///
    /// Unwrapping happens at most once per expression, so exactly one
    /// suffix can appear; shapes this grammar cannot express fall through
    /// to the fallback and degrade to a bare name.
    pub(super) fn type_expr(&mut self, context_ns: &str, ty: TypeId) -> String {
        let model = self.model;
        let info = model.info(ty);

        if let Some(expr) = primitive_expr(&info.qualified_name) {
            return expr.to_string();
        }

        if let Some(generic) = &info.generic {
            match generic.shape {
                GenericShape::Map if generic.args.len() == 2 => {
                    return self.map_expr(generic.args[0], generic.args[1]);
                }
                GenericShape::Optional
                    if generic.args.len() == 1 && model.info(generic.args[0]).value_type =>
                {
                    return format!("{}|null", self.unwrapped_expr(context_ns, generic.args[0]));
                }
                GenericShape::Sequence if generic.args.len() == 1 => {
                    return format!("{}[]", self.unwrapped_expr(context_ns, generic.args[0]));
                }
                _ => {}
            }
        }

        self.fallback_expr(context_ns, ty)
    }

    /// Resolver for an argument already unwrapped from its suffix shape.
    /// No further unwrapping takes place here.
    fn unwrapped_expr(&mut self, context_ns: &str, ty: TypeId) -> String {
        let model = self.model;
        let info = model.info(ty);

        if let Some(expr) = primitive_expr(&info.qualified_name) {
            return expr.to_string();
        }

        if let Some(generic) = &info.generic {
            if generic.shape == GenericShape::Map && generic.args.len() == 2 {
                return self.map_expr(generic.args[0], generic.args[1]);
            }
        }

        self.fallback_expr(context_ns, ty)
    }

    /// Index-signature expression for a two-argument associative generic.
    fn map_expr(&mut self, key: TypeId, value: TypeId) -> String {
        format!(
            "{{ [key: {}]: {} }}",
            self.entry_expr(key),
            self.entry_expr(value)
        )
    }

    /// Resolver for index-signature key/value positions: primitive table,
    /// nested index signatures, and unqualified composite names.
    fn entry_expr(&mut self, ty: TypeId) -> String {
        let model = self.model;
        let info = model.info(ty);

        if let Some(expr) = primitive_expr(&info.qualified_name) {
            return expr.to_string();
        }

        if let Some(generic) = &info.generic {
            if generic.shape == GenericShape::Map && generic.args.len() == 2 {
                return self.map_expr(generic.args[0], generic.args[1]);
            }
        }

        self.enqueue(ty);
        namespace::short_name(&info.qualified_name).to_string()
    }

    /// Composite fallback: enqueue for extraction and emit the short name,
    /// namespace-qualified only when it crosses the context namespace.
    fn fallback_expr(&mut self, context_ns: &str, ty: TypeId) -> String {
        let model = self.model;
        let info = model.info(ty);
        self.enqueue(ty);

        let ns = namespace::namespace_of(&info.qualified_name);
        let name = namespace::short_name(&info.qualified_name);
        if ns.is_empty() || ns == context_ns {
            name.to_string()
        } else {
            format!("{}.{}", ns, name)
        }
    }
}
