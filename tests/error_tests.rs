use intvec::{
    ArrayStore, Backing, BufferMode, BufferStore, IntSequence, IntStore, IntVecError, RawStore,
};

#[test]
fn test_try_get_out_of_bounds_every_backing() {
    for backing in [
        Backing::Array,
        Backing::BufferHeap,
        Backing::BufferNative,
        Backing::Raw,
    ] {
        let mut store = IntSequence::with_capacity(4, backing);
        assert_eq!(
            store.try_get(0),
            Err(IntVecError::IndexOutOfBounds {
                index: 0,
                length: 0
            }),
            "{backing:?}"
        );

        store.push(42);
        assert_eq!(store.try_get(0), Ok(42), "{backing:?}");
        assert_eq!(
            store.try_get(1),
            Err(IntVecError::IndexOutOfBounds {
                index: 1,
                length: 1
            }),
            "{backing:?}"
        );
    }
}

#[test]
fn test_try_get_within_spare_capacity_is_still_an_error() {
    // Capacity beyond len is allocated but unreadable.
    let mut store = BufferStore::with_capacity(16, BufferMode::Heap);
    store.push(1);
    assert!(store.try_get(5).is_err());
    assert_eq!(store.capacity(), 16);
}

#[test]
fn test_error_display() {
    let err = IntVecError::IndexOutOfBounds {
        index: 9,
        length: 3,
    };
    assert_eq!(
        err.to_string(),
        "Index out of bounds: index 9 is beyond sequence length 3"
    );
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_array_get_past_len_panics() {
    let mut store = ArrayStore::with_capacity(4);
    store.push(1);
    let _ = store.get(1);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_buffer_get_past_len_panics() {
    let mut store = BufferStore::with_capacity(4, BufferMode::Heap);
    store.push(1);
    // Bytes for index 2 exist in the buffer; the read is still rejected.
    let _ = store.get(2);
}

// The raw variant has no release-build bounds metadata; the guard below
// exists only under debug assertions, which is how tests run.
#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "out of bounds")]
fn test_raw_get_past_len_panics_in_debug() {
    let mut store = RawStore::with_capacity(4);
    store.push(1);
    let _ = store.get(3);
}
