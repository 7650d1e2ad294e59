use kettle_common::{Atom, Interner};

#[test]
fn test_intern_deduplicates() {
    let mut interner = Interner::new();
    let a = interner.intern("list");
    let b = interner.intern("list");
    let c = interner.intern("item");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.resolve(a), "list");
    assert_eq!(interner.resolve(c), "item");
}

#[test]
fn test_empty_string_is_none_atom() {
    let mut interner = Interner::new();
    assert!(interner.is_empty());
    assert_eq!(interner.intern(""), Atom::NONE);
    assert!(Atom::NONE.is_none());
    assert!(interner.is_empty());
}

#[test]
fn test_lookup_does_not_intern() {
    let mut interner = Interner::new();
    assert_eq!(interner.lookup("x"), None);
    assert_eq!(interner.len(), 1);

    let x = interner.intern("x");
    assert_eq!(interner.lookup("x"), Some(x));
    assert_eq!(interner.len(), 2);
    assert!(!interner.is_empty());
}

#[test]
fn test_resolve_out_of_bounds() {
    let interner = Interner::new();
    assert_eq!(interner.resolve(Atom(42)), "");
    assert_eq!(interner.try_resolve(Atom(42)), None);
}
