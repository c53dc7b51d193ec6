use std::path::PathBuf;

use tsdecl_core::{TypeKind, TypeModel};

use crate::util::load_dump;

pub struct TypesArgs {
    pub dump_path: Option<PathBuf>,
}

pub fn run(args: TypesArgs) {
    let Some(dump_path) = args.dump_path.as_deref() else {
        eprintln!("error: dump input required: pass a file path or `-` for stdin");
        std::process::exit(1);
    };

    let json = load_dump(dump_path).unwrap_or_else(|e| {
        eprintln!("error: failed to read dump file: {}", e);
        std::process::exit(1);
    });
    let model = TypeModel::from_json(&json).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    let mut groups: Vec<(&str, Vec<String>)> = Vec::new();
    for (_, info) in model.types() {
        let kind = match info.kind {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            // Implicit entries (built-ins, interned uses) are not declarations.
            TypeKind::Primitive | TypeKind::Generic => continue,
        };
        let (ns, name) = match info.qualified_name.rsplit_once('.') {
            Some((ns, name)) => (ns, name),
            None => ("", info.qualified_name.as_str()),
        };
        let members = match info.kind {
            TypeKind::Enum => info.enum_members.len(),
            _ => info.properties.len() + info.methods.len(),
        };
        let noun = if members == 1 { "member" } else { "members" };
        let row = format!("{:<9} {:<20} {} {}", kind, name, members, noun);
        match groups.iter_mut().find(|(group, _)| *group == ns) {
            Some((_, rows)) => rows.push(row),
            None => groups.push((ns, vec![row])),
        }
    }

    for (ns, rows) in &groups {
        if ns.is_empty() {
            println!("(global)");
        } else {
            println!("{}", ns);
        }
        for row in rows {
            println!("  {}", row);
        }
    }
}
