use seqmock::matcher::range;
use seqmock::{args, Call, MockType};

#[test]
fn success() {
    let mock = MockType::new(
        "sensor",
        [
            Call::constructor(),
            Call::new("report").with_args(args![range(4..10)]),
            Call::new("report").with_args(args![range(4..=10)]),
            Call::new("report").with_args(args![range(..0)]),
        ],
    );

    let obj = mock.instantiate(args![]);
    let _ = obj.method("report").complete(args![4]);
    let _ = obj.method("report").complete(args![10]);
    let _ = obj.method("report").complete(args![-3]);

    mock.verify().unwrap();
}

#[test]
#[should_panic]
fn failure() {
    let mock = MockType::new(
        "sensor",
        [Call::constructor(), Call::new("report").with_args(args![range(4..10)])],
    );

    let obj = mock.instantiate(args![]);
    let _ = obj.method("report").complete(args![10]);

    mock.verify().unwrap();
}

#[test]
fn display() {
    let call = Call::new("report").with_args(args![range(4..10), range(1.0..=2.5)]);

    assert_eq!("([4, 10), [1.0, 2.5])", call.args().to_string());
}
