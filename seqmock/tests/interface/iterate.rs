use seqmock::{args, Call, MockType, Value};

#[test]
fn yields_configured_items() {
    let mock = MockType::new(
        "list",
        [
            Call::constructor(),
            Call::new("iterate").and_yield(["a".to_owned(), "b".to_owned()]),
        ],
    );
    let obj = mock.instantiate(args![]);

    let items = (&obj)
        .into_iter()
        .filter_map(|value| value.get::<String>())
        .collect::<Vec<_>>();

    assert_eq!(vec!["a", "b"], items);
    mock.verify().unwrap();
}

#[test]
fn single_return_value_is_one_item() {
    let mock = MockType::new(
        "list",
        [Call::constructor(), Call::new("iterate").and_return(5)],
    );
    let obj = mock.instantiate(args![]);

    let items = (&obj).into_iter().collect::<Vec<_>>();

    assert_eq!(vec![Value::new(5)], items);
}

#[test]
fn unexpected_iteration_is_empty_and_recorded() {
    let mock = MockType::new("list", [Call::constructor()]);
    let obj = mock.instantiate(args![]);

    let mut count = 0;
    for _ in &obj {
        count += 1;
    }

    assert_eq!(0, count);
    assert_eq!("Surprise at #1: <iterate>", mock.verify().unwrap_err().to_string());
}
