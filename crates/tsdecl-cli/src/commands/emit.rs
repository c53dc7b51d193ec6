use std::fs;
use std::path::PathBuf;

use tsdecl_core::TypeModel;
use tsdecl_gen::Config;

use crate::util::load_dump;

pub struct EmitArgs {
    pub dump_path: Option<PathBuf>,
    pub root: Option<String>,
    pub binding: String,
    pub output: Option<PathBuf>,
}

pub fn run(args: EmitArgs) {
    let Some(dump_path) = args.dump_path.as_deref() else {
        eprintln!("error: dump input required: pass a file path or `-` for stdin");
        std::process::exit(1);
    };
    let Some(root_name) = args.root.as_deref() else {
        eprintln!("error: --root is required");
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
    let Some(root) = model.lookup(root_name) else {
        eprintln!("error: type `{}` is not declared in the dump", root_name);
        std::process::exit(1);
    };

    let config = Config::new().binding_name(args.binding.as_str());
    let output = tsdecl_gen::generate(&model, root, &config).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    match &args.output {
        Some(path) => fs::write(path, &output).unwrap_or_else(|e| {
            eprintln!("error: failed to write {}: {}", path.display(), e);
            std::process::exit(1);
        }),
        // The document already ends with a newline.
        None => print!("{}", output),
    }
}
