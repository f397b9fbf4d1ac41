#[macro_export]
macro_rules! assert_empty {
    ($e:expr) => {{
        let items = &$e;
        assert!(
            items.is_empty(),
            "expected empty collection; len={}; actual={:?}",
            items.len(),
            items
        );
    }};
}
