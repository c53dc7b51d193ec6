//! Declaration document rendering.
//!
//! Pure text assembly over finished records; nothing here consults the
//! type graph except for the root's display name. Layout is fixed:
//! three-space block headers, seven-space member rows, one blank line
//! after every block. Namespace groups appear in first-appearance order
//! and the global-namespace group renders without a wrapper.

use indexmap::IndexMap;
use tsdecl_core::{TypeId, TypeModel};

use crate::config::Config;
use crate::define::{Define, DefineBody};
use crate::namespace;

/// Render discovery output into the final declaration document.
pub(crate) fn render(
    model: &TypeModel,
    root: TypeId,
    defines: &IndexMap<TypeId, Define>,
    config: &Config,
) -> String {
    let mut out = String::new();

    let root_info = model.info(root);
    let ns = namespace::namespace_of(&root_info.qualified_name);
    let name = namespace::short_name(&root_info.qualified_name);
    if ns.is_empty() {
        out.push_str(&format!("declare const {}: {};\n", config.binding_name, name));
    } else {
        out.push_str(&format!(
            "declare const {}: {}.{};\n",
            config.binding_name, ns, name
        ));
    }

    let mut groups: IndexMap<&str, Vec<&Define>> = IndexMap::new();
    for define in defines.values() {
        groups
            .entry(define.namespace.as_str())
            .or_default()
            .push(define);
    }

    for (ns, group) in &groups {
        let wrapped = !ns.is_empty();
        if wrapped {
            out.push_str(&format!("declare namespace {} {{\n", ns));
        }
        for define in group {
            render_define(&mut out, define);
        }
        if wrapped {
            out.push_str("}\n");
        }
    }

    out
}

fn render_define(out: &mut String, define: &Define) {
    match &define.body {
        DefineBody::Members {
            properties,
            methods,
        } => {
            out.push_str(&format!("   interface {} {{\n", define.name));
            for prop in properties {
                out.push_str(&format!("       {}:{};\n", prop.name, prop.type_expr));
            }
            for method in methods {
                let params: Vec<String> = method
                    .params
                    .iter()
                    .map(|p| format!("{}:{}", p.name, p.type_expr))
                    .collect();
                out.push_str(&format!(
                    "       {}({}):{};\n",
                    method.name,
                    params.join(","),
                    method.return_expr
                ));
            }
            out.push_str("   }\n\n");
        }
        DefineBody::Enum { members } => {
            out.push_str(&format!("   enum {} {{\n", define.name));
            for member in members {
                out.push_str(&format!("       {}={},\n", member.name, member.value));
            }
            out.push_str("   }\n\n");
        }
    }
}
