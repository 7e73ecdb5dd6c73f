use seqmock::action::capture;
use seqmock::{args, Call, MockType};

#[test]
fn captures_matched_invocations_only() {
    let capture = capture();
    let mock = MockType::new(
        "printer",
        [
            Call::constructor(),
            Call::new("print").with_args(args!["a"]).and_execute(capture.clone()),
            Call::new("print").with_args(args!["b"]).and_execute(capture.clone()),
        ],
    );

    let obj = mock.instantiate(args![]);
    let _ = obj.method("print").complete(args!["a"]);
    let _ = obj.method("print").complete(args!["c"]);

    assert_eq!(1, capture.count());
    assert_eq!(vec![args!["a"]], capture.calls());
    assert!(mock.verify().is_err());
}
