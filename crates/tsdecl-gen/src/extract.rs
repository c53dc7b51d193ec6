//! Member extraction: one discovered type into one [`Define`] record.

use tsdecl_core::utils::lower_first;
use tsdecl_core::{TypeId, TypeInfo, TypeKind};

use crate::define::{Define, DefineBody, EnumMember, Method, Param, Property};
use crate::generator::Generator;
use crate::namespace;
use crate::{Error, Result};

/// Universal object-identity methods every host type inherits. Never part
/// of a declaration.
const OBJECT_METHODS: [&str; 4] = ["ToString", "Equals", "GetHashCode", "GetType"];

impl Generator<'_> {
    /// Build the record for one type, mapping every member type reference.
    pub(super) fn extract(&mut self, id: TypeId) -> Result<Define> {
        let model = self.model;
        let info = model.info(id);
        let body = match info.kind {
            TypeKind::Class | TypeKind::Interface => self.extract_members(id),
            TypeKind::Enum => extract_enum(info),
            TypeKind::Primitive | TypeKind::Generic => {
                return Err(Error::UnclassifiableType {
                    name: info.qualified_name.clone(),
                    kind: info.kind,
                });
            }
        };
        Ok(Define {
            namespace: namespace::namespace_of(&info.qualified_name).to_string(),
            name: namespace::short_name(&info.qualified_name).to_string(),
            body,
        })
    }

    /// Class/interface body: publicly readable instance properties, then
    /// public non-synthesized instance methods. Own members come first,
    /// then each ancestor's down the extends chain, without deduplication.
    fn extract_members(&mut self, id: TypeId) -> DefineBody {
        let model = self.model;
        let context_ns = namespace::namespace_of(&model.info(id).qualified_name);

        let mut properties = Vec::new();
        let mut methods = Vec::new();
        // Malformed dumps can declare cyclic extends chains.
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(ty) = current {
            if chain.contains(&ty) {
                break;
            }
            chain.push(ty);

            let info = model.info(ty);
            for prop in info.properties.iter().filter(|p| p.public && !p.is_static) {
                properties.push(Property {
                    name: lower_first(&prop.name),
                    type_expr: self.type_expr(context_ns, prop.ty),
                });
            }
            for method in info.methods.iter().filter(|m| {
                m.public
                    && !m.is_static
                    && !m.synthesized
                    && !OBJECT_METHODS.contains(&m.name.as_str())
            }) {
                // Parameters map before the return type; discovery order
                // follows mapping order.
                let params = method
                    .params
                    .iter()
                    .map(|p| Param {
                        name: p.name.clone(),
                        type_expr: self.type_expr(context_ns, p.ty),
                    })
                    .collect();
                methods.push(Method {
                    name: lower_first(&method.name),
                    params,
                    return_expr: self.type_expr(context_ns, method.returns),
                });
            }
            current = info.base;
        }

        DefineBody::Members {
            properties,
            methods,
        }
    }
}

/// Enum body: members in declared order. The extends chain is ignored;
/// host enums cannot extend each other.
fn extract_enum(info: &TypeInfo) -> DefineBody {
    DefineBody::Enum {
        members: info
            .enum_members
            .iter()
            .map(|m| EnumMember {
                name: m.name.clone(),
                value: m.value,
            })
            .collect(),
    }
}
