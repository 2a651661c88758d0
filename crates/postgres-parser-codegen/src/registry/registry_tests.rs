#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case("enums", Generator::Enums ; "enums")]
#[test_case("structs", Generator::Structs ; "structs")]
fn Generator___from_str___registered_name___resolves(name: &str, expected: Generator) {
    assert_eq!(name.parse::<Generator>().unwrap(), expected);
}

#[test_case("" ; "empty")]
#[test_case("Enums" ; "wrong case")]
#[test_case("enum" ; "singular")]
#[test_case("nodes" ; "unregistered")]
fn Generator___from_str___unknown_name___fails(name: &str) {
    let err = name.parse::<Generator>().unwrap_err();

    match err {
        CodegenError::UnknownGenerator { name: got, expected } => {
            assert_eq!(got, name);
            assert_eq!(expected, "enums, structs");
        }
        other => panic!("expected UnknownGenerator, got {other:?}"),
    }
}

#[test]
fn Generator___descriptor___enums_entry() {
    let descriptor = Generator::Enums.descriptor();

    assert_eq!(descriptor.name, "enums");
    assert_eq!(descriptor.schema_file, "enum_defs.json");
    assert_eq!(descriptor.template_file, "enums.py.hbs");
    assert_eq!(descriptor.kind, SchemaKind::Enums);
}

#[test]
fn Generator___descriptor___structs_entry() {
    let descriptor = Generator::Structs.descriptor();

    assert_eq!(descriptor.name, "structs");
    assert_eq!(descriptor.schema_file, "struct_defs.json");
    assert_eq!(descriptor.template_file, "struct_definitions.py.hbs");
    assert_eq!(descriptor.kind, SchemaKind::Structs);
}

#[test]
fn Generator___display___round_trips_through_from_str() {
    for generator in Generator::ALL {
        assert_eq!(generator.to_string().parse::<Generator>().unwrap(), generator);
    }
}
