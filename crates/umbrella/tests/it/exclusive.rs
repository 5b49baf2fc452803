use core::cell::Cell;
use fnsig::{Exclusive, FnRef, ReentrantCallError};
use std::string::ToString;

#[test]
fn mutable_state() {
    let mut count = 0;
    let counter = Exclusive::new(|| {
        count += 1;
        count
    });

    let f = FnRef::<fn() -> Result<i32, ReentrantCallError>>::new(&counter);
    assert_eq!(f.call(), Ok(1));
    assert_eq!(f.call(), Ok(2));
    assert!(!counter.is_running());

    drop(counter);
    assert_eq!(count, 2);
}

#[test]
fn reentrant_call_is_reported() {
    type Again<'a> = FnRef<'a, fn() -> Result<bool, ReentrantCallError>>;

    let again: Cell<Option<Again<'_>>> = Cell::new(None);
    let inner = Cell::new(None);
    let exclusive = Exclusive::new(|| match again.get() {
        Some(f) => {
            inner.set(Some(f.call()));
            true
        }
        None => false,
    });

    assert_eq!(fnsig::invoke(&exclusive, ()), Ok(false));

    again.set(Some(FnRef::new(&exclusive)));
    assert_eq!(fnsig::invoke(&exclusive, ()), Ok(true));

    let error = match inner.get() {
        Some(Err(error)) => error,
        other => panic!("expected reentrant call to fail, got {other:?}"),
    };

    assert!(error.type_name().contains("closure"), "{error:?}");
    insta::assert_snapshot!(
        error.to_string(),
        @"exclusive callable was called again before its previous call returned"
    );
}
