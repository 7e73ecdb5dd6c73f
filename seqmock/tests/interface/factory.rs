use seqmock::{args, dispatch, of_type, Args, Call, Factory, MockObject, MockType};

trait Storage {
    fn store(&self, key: &str, value: u32) -> bool;
    fn flush(&self);
}

dispatch! {
    impl Storage for MockObject {
        fn store(&self, key: &str, value: u32) -> bool;
        fn flush(&self);
    }
}

struct MemoryStorage;

impl Storage for MemoryStorage {
    fn store(&self, _key: &str, _value: u32) -> bool {
        true
    }

    fn flush(&self) {}
}

/// Code under test that creates its collaborator itself.
fn save_all<F>(factory: &F, values: &[(&str, u32)]) -> usize
where
    F: Factory,
    F::Instance: Storage,
{
    let storage = factory.create(args!["data.db"]);

    let stored = values
        .iter()
        .filter(|(key, value)| storage.store(key, *value))
        .count();

    storage.flush();

    stored
}

#[test]
fn mock_type_as_factory() {
    let mock = MockType::new(
        "storage",
        [
            Call::constructor().with_args(args!["data.db"]),
            Call::new("store").with_args(args!["a", 1_u32]).and_return(true),
            Call::new("store")
                .with_args(args![of_type::<String>(), of_type::<u32>()])
                .and_return(false),
            Call::new("flush"),
        ],
    );

    let stored = save_all(&mock, &[("a", 1), ("b", 2)]);

    assert_eq!(1, stored);
    mock.verify().unwrap();
}

#[test]
fn closure_as_factory() {
    let factory = |_: Args| MemoryStorage;

    assert_eq!(2, save_all(&factory, &[("a", 1), ("b", 2)]));
}

#[test]
fn missing_flush_is_reported() {
    let mock = MockType::new(
        "storage",
        [
            Call::constructor().with_args(args!["data.db"]),
            Call::new("flush"),
            Call::new("flush"),
        ],
    );

    let _ = save_all(&mock, &[]);

    assert_eq!("Not Called at #2: <flush>", mock.verify().unwrap_err().to_string());
}
