use super::index_of;
use crate::resolve::{resolve_bool, resolve_int, resolve_string, Resolved, ValueSource};

#[test]
fn bool_from_flag() {
    let index = index_of("-nojff -jff=0");
    assert_eq!(
        resolve_bool(&index, "-jff", true),
        Resolved {
            value: false,
            source: ValueSource::Flag
        }
    );
}

#[test]
fn bool_from_negated() {
    let index = index_of("--nojff");
    assert_eq!(
        resolve_bool(&index, "-jff", true),
        Resolved {
            value: false,
            source: ValueSource::Negated
        }
    );
}

#[test]
fn bool_from_default() {
    let index = index_of("-other");
    assert_eq!(resolve_bool(&index, "-jff", true).source, ValueSource::Default);
}

#[test]
fn string_sources() {
    let index = index_of("-jff");
    assert_eq!(resolve_string(&index, "-jff", "x").source, ValueSource::Flag);
    assert_eq!(resolve_string(&index, "-bar", "x").source, ValueSource::Default);
}

#[test]
fn int_sources() {
    let index = index_of("-jff=NaN");
    let resolved = resolve_int(&index, "-jff", 5);
    assert_eq!(resolved.value, 0);
    assert_eq!(resolved.source, ValueSource::Flag);
    assert_eq!(resolve_int(&index, "-bar", 5).source, ValueSource::Default);
}

#[test]
fn negated_only_applies_to_bools() {
    let index = index_of("-nojff");
    assert_eq!(resolve_int(&index, "-jff", 3).source, ValueSource::Default);
    assert_eq!(resolve_string(&index, "-jff", "x").source, ValueSource::Default);
}
