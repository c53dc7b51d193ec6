use indoc::indoc;
use tsdecl_core::{TypeKind, TypeModel};

use crate::{Config, DefineBody, Error, discover, generate};

/// A scripting-host dump: root object, a cross-namespace class with an
/// ancestor, an enum, and every member filter the extractor applies.
const SCRIPT_DUMP: &str = r#"[
  {
    "type": "Acme.Scripting.KScript",
    "kind": "class",
    "properties": [
      {"name": "Version", "type": "System.String"},
      {"name": "Tags", "type": {"array": "System.String"}},
      {"name": "Timeout", "type": {"optional": "System.Int32"}},
      {"name": "Env", "type": {"generic": "System.Collections.Generic.IDictionary", "shape": "map", "args": ["System.String", "System.String"]}}
    ],
    "methods": [
      {"name": "GetUser", "returns": "Acme.Models.User", "params": [{"name": "id", "type": "System.Int32"}]},
      {"name": "Mode", "returns": "Acme.Scripting.KMode"},
      {"name": "ToString", "returns": "System.String"},
      {"name": "get_Version", "returns": "System.String", "synthesized": true},
      {"name": "Seed", "returns": "System.Void", "static": true}
    ]
  },
  {
    "type": "Acme.Models.User",
    "kind": "class",
    "extends": "Acme.Models.Person",
    "properties": [
      {"name": "Id", "type": "System.Int32"},
      {"name": "Secret", "type": "System.String", "public": false}
    ]
  },
  {
    "type": "Acme.Models.Person",
    "kind": "class",
    "properties": [{"name": "Name", "type": "System.String"}],
    "methods": [
      {"name": "Rename", "returns": "System.Void", "params": [{"name": "name", "type": "System.String"}]}
    ]
  },
  {
    "type": "Acme.Scripting.KMode",
    "kind": "enum",
    "members": [
      {"name": "Strict", "value": 0},
      {"name": "Loose", "value": 1}
    ]
  }
]"#;

fn generate_from(json: &str, root: &str) -> String {
    let model = TypeModel::from_json(json).unwrap();
    let root = model.lookup(root).unwrap();
    generate(&model, root, &Config::new()).unwrap()
}

#[test]
fn script_closure_end_to_end() {
    let out = generate_from(SCRIPT_DUMP, "Acme.Scripting.KScript");

    insta::assert_snapshot!(out, @r"
    declare const k: Acme.Scripting.KScript;
    declare namespace Acme.Scripting {
       interface KScript {
           version:string;
           tags:string[];
           timeout:number|null;
           env:{ [key: string]: string };
           getUser(id:number):Acme.Models.User;
           mode():KMode;
       }

       enum KMode {
           Strict=0,
           Loose=1,
       }

    }
    declare namespace Acme.Models {
       interface User {
           id:number;
           name:string;
           rename(name:string):void;
       }

    }
    ");
}

#[test]
fn global_interface_closure_end_to_end() {
    let json = r#"[
      {"type": "KScript", "kind": "interface",
       "properties": [{"name": "User", "type": "User"}],
       "methods": [
         {"name": "Execute", "returns": "System.Void", "params": [
           {"name": "code", "type": "System.String"},
           {"name": "user", "type": "User"}
         ]}
       ]},
      {"type": "User", "kind": "class", "extends": "Person",
       "properties": [
         {"name": "Name", "type": "System.String"},
         {"name": "Pwd", "type": "System.String"},
         {"name": "Age", "type": "System.Int32"}
       ]},
      {"type": "Person", "kind": "class",
       "properties": [{"name": "Id", "type": "System.Int32"}]}
    ]"#;
    let out = generate_from(json, "KScript");

    let expected = indoc! {"
        declare const k: KScript;
           interface KScript {
               user:User;
               execute(code:string,user:User):void;
           }

           interface User {
               name:string;
               pwd:string;
               age:number;
               id:number;
           }

    "};
    assert_eq!(out, expected);
}

#[test]
fn discovery_order_is_breadth_first() {
    let model = TypeModel::from_json(SCRIPT_DUMP).unwrap();
    let root = model.lookup("Acme.Scripting.KScript").unwrap();

    let defines = discover(&model, root).unwrap();

    let names: Vec<&str> = defines.values().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["KScript", "User", "KMode"]);
}

#[test]
fn method_params_are_discovered_before_the_return_type() {
    let json = r#"[
      {"type": "Acme.App", "kind": "class", "methods": [
        {"name": "Convert", "returns": "Acme.Output", "params": [{"name": "input", "type": "Acme.Input"}]}
      ]},
      {"type": "Acme.Input", "kind": "class"},
      {"type": "Acme.Output", "kind": "class"}
    ]"#;
    let model = TypeModel::from_json(json).unwrap();
    let root = model.lookup("Acme.App").unwrap();

    let defines = discover(&model, root).unwrap();

    let names: Vec<&str> = defines.values().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["App", "Input", "Output"]);
}

#[test]
fn flattened_ancestors_get_no_record_of_their_own() {
    let model = TypeModel::from_json(SCRIPT_DUMP).unwrap();
    let root = model.lookup("Acme.Scripting.KScript").unwrap();

    let defines = discover(&model, root).unwrap();

    assert!(defines.values().all(|d| d.name != "Person"));
}

#[test]
fn members_flatten_down_the_extends_chain() {
    let json = r#"[
      {"type": "Acme.C", "kind": "class", "extends": "Acme.B",
       "properties": [{"name": "Name", "type": "System.String"}]},
      {"type": "Acme.B", "kind": "class", "extends": "Acme.A",
       "properties": [{"name": "Age", "type": "System.Int32"}]},
      {"type": "Acme.A", "kind": "class",
       "properties": [{"name": "Name", "type": "System.Object"}]}
    ]"#;
    let model = TypeModel::from_json(json).unwrap();
    let root = model.lookup("Acme.C").unwrap();

    let defines = discover(&model, root).unwrap();

    // Own members first, then ancestors'; shadowed names are kept.
    let DefineBody::Members { properties, .. } = &defines[&root].body else {
        panic!("expected a members body");
    };
    let rows: Vec<(&str, &str)> = properties
        .iter()
        .map(|p| (p.name.as_str(), p.type_expr.as_str()))
        .collect();
    assert_eq!(rows, [("name", "string"), ("age", "number"), ("name", "any")]);
}

#[test]
fn builtin_references_never_produce_records() {
    let json = r#"[
      {"type": "App", "kind": "class", "properties": [
        {"name": "Self", "type": "App"},
        {"name": "Ticks", "type": "System.DateTime"}
      ]}
    ]"#;
    let out = generate_from(json, "App");

    let expected = indoc! {"
        declare const k: App;
           interface App {
               self:App;
               ticks:DateTime;
           }

    "};
    assert_eq!(out, expected);
}

#[test]
fn reference_cycles_terminate() {
    let json = r#"[
      {"type": "Acme.A", "kind": "class", "properties": [{"name": "B", "type": "Acme.B"}]},
      {"type": "Acme.B", "kind": "class", "properties": [{"name": "A", "type": "Acme.A"}]}
    ]"#;
    let model = TypeModel::from_json(json).unwrap();
    let root = model.lookup("Acme.A").unwrap();

    let defines = discover(&model, root).unwrap();

    let names: Vec<&str> = defines.values().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);
}

#[test]
fn duplicate_references_share_one_record() {
    let json = r#"[
      {"type": "Acme.App", "kind": "class", "properties": [
        {"name": "First", "type": "Acme.User"},
        {"name": "Second", "type": "Acme.User"}
      ]},
      {"type": "Acme.User", "kind": "class"}
    ]"#;
    let model = TypeModel::from_json(json).unwrap();
    let root = model.lookup("Acme.App").unwrap();

    let defines = discover(&model, root).unwrap();

    assert_eq!(defines.len(), 2);
}

#[test]
fn generation_is_deterministic() {
    let first = generate_from(SCRIPT_DUMP, "Acme.Scripting.KScript");
    let second = generate_from(SCRIPT_DUMP, "Acme.Scripting.KScript");
    assert_eq!(first, second);
}

#[test]
fn undeclared_user_type_is_an_error() {
    let json = r#"[
      {"type": "Acme.App", "kind": "class", "properties": [
        {"name": "Thing", "type": "Acme.Missing"}
      ]}
    ]"#;
    let model = TypeModel::from_json(json).unwrap();
    let root = model.lookup("Acme.App").unwrap();

    let err = discover(&model, root).unwrap_err();

    assert_eq!(
        err,
        Error::UnclassifiableType {
            name: "Acme.Missing".to_string(),
            kind: TypeKind::Primitive,
        }
    );
    assert_eq!(
        err.to_string(),
        "cannot declare type `Acme.Missing`: Primitive types have no declaration form"
    );
}

#[test]
fn root_in_builtin_namespace_renders_unqualified() {
    let json = r#"[
      {"type": "System.AppDomain", "kind": "class", "properties": [
        {"name": "FriendlyName", "type": "System.String"}
      ]}
    ]"#;
    let out = generate_from(json, "System.AppDomain");

    let expected = indoc! {"
        declare const k: AppDomain;
           interface AppDomain {
               friendlyName:string;
           }

    "};
    assert_eq!(out, expected);
}

#[test]
fn optional_enum_property_discovers_the_enum() {
    let json = r#"[
      {"type": "Acme.App", "kind": "class", "properties": [
        {"name": "Mode", "type": {"optional": "Acme.Mode"}}
      ]},
      {"type": "Acme.Mode", "kind": "enum", "members": [{"name": "On", "value": 0}]}
    ]"#;
    let out = generate_from(json, "Acme.App");

    assert!(out.contains("mode:Mode|null;"));
    assert!(out.contains("   enum Mode {"));
}

#[test]
fn duplicate_enum_values_are_preserved_in_declared_order() {
    let json = r#"[
      {"type": "Acme.App", "kind": "class", "properties": [
        {"name": "Level", "type": "Acme.Level"}
      ]},
      {"type": "Acme.Level", "kind": "enum", "members": [
        {"name": "Low", "value": 1},
        {"name": "Default", "value": 1},
        {"name": "Unset", "value": -1}
      ]}
    ]"#;
    let out = generate_from(json, "Acme.App");

    let expected = indoc! {"
        declare const k: Acme.App;
        declare namespace Acme {
           interface App {
               level:Level;
           }

           enum Level {
               Low=1,
               Default=1,
               Unset=-1,
           }

        }
    "};
    assert_eq!(out, expected);
}

#[test]
fn binding_name_threads_through_generate() {
    let model = TypeModel::from_json(SCRIPT_DUMP).unwrap();
    let root = model.lookup("Acme.Scripting.KScript").unwrap();

    let config = Config::new().binding_name("script");
    let out = generate(&model, root, &config).unwrap();

    assert!(out.starts_with("declare const script: Acme.Scripting.KScript;\n"));
}
