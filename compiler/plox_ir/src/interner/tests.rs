use super::*;

#[test]
fn test_intern_and_lookup() {
    let interner = StringInterner::new();

    let hello = interner.intern("hello");
    let world = interner.intern("world");
    let hello2 = interner.intern("hello");

    assert_eq!(hello, hello2);
    assert_ne!(hello, world);

    assert_eq!(interner.lookup(hello), "hello");
    assert_eq!(interner.lookup(world), "world");
}

#[test]
fn test_empty_string() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn test_keywords_pre_interned() {
    let interner = StringInterner::new();
    let before = interner.len();

    let while_name = interner.intern("while");
    assert_eq!(interner.lookup(while_name), "while");
    assert_eq!(interner.len(), before);
}

#[test]
fn test_shared_interner() {
    let interner = SharedInterner::new();
    let interner2 = interner.clone();

    let name1 = interner.intern("shared");
    let name2 = interner2.intern("shared");

    assert_eq!(name1, name2);
    assert_eq!(interner2.lookup(name1), "shared");
}

#[test]
fn test_unknown_name_is_empty() {
    let big = StringInterner::new();
    for i in 0..50 {
        big.intern(&format!("n{i}"));
    }
    let foreign = big.intern("only_here");

    let small = StringInterner::new();
    assert_eq!(small.lookup(foreign), "");
}
