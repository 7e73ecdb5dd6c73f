use seqmock::{args, should_be_called, Call, MockType, Value, VerificationFailure};

#[test]
fn matching_call_returns_configured_value() {
    let mock = MockType::new(
        "runner",
        [
            Call::constructor(),
            Call::new("run").with_args(args![1, 2]).and_return(true),
        ],
    );

    let obj = mock.instantiate(args![]);
    let ret = obj.method("run").complete(args![1, 2]);

    assert_eq!(Some(Value::new(true)), ret);
    assert!(mock.verify().is_ok());
}

#[test]
fn wrong_method_is_a_call_mismatch() {
    let mock = MockType::new("runner", [Call::constructor(), Call::new("run")]);

    let obj = mock.instantiate(args![]);
    assert_eq!(None, obj.method("wrongMethod").complete(args![]));

    let err = mock.verify().unwrap_err();

    assert!(matches!(err, VerificationFailure::CallMismatch { index: 1, .. }));
    assert_eq!(
        "Call Mismatch at #1: Expected <run>, Was <wrongMethod>",
        err.to_string()
    );
}

#[test]
fn extra_call_is_a_surprise() {
    let mock = MockType::new("runner", [Call::constructor()]);

    let obj = mock.instantiate(args![]);
    let _ = obj.method("extra").complete(args![]);

    let err = mock.verify().unwrap_err();

    assert!(matches!(err, VerificationFailure::Surprise { index: 1, .. }));
    assert_eq!("Surprise at #1: <extra>", err.to_string());
}

#[test]
fn extra_argument_is_an_argument_mismatch() {
    let mock = MockType::new(
        "runner",
        [Call::constructor(), Call::new("run").with_args(args![1, 2])],
    );

    let obj = mock.instantiate(args![]);
    assert_eq!(None, obj.method("run").complete(args![1, 2, 3]));

    let err = mock.verify().unwrap_err();

    assert!(matches!(err, VerificationFailure::ArgumentMismatch { index: 1, .. }));
    assert_eq!(
        "Argument Mismatch at #1: Expected <(1, 2)>, Was <(1, 2, 3)>",
        err.to_string()
    );
}

#[test]
fn full_sequence_verifies() {
    let mock = MockType::new(
        "connection",
        [
            Call::constructor().with_args(args!["localhost", 8080_u16]),
            should_be_called("send").with_args(args![vec![1_u8, 2, 3]]),
            should_be_called("receive").and_return(vec![4_u8, 5]),
            should_be_called("close"),
        ],
    );

    let obj = mock.instantiate(args!["localhost", 8080_u16]);
    let _ = obj.method("send").complete(args![vec![1_u8, 2, 3]]);
    let received = obj.method("receive").complete(args![]);
    let _ = obj.method("close").complete(args![]);

    assert_eq!(
        Some(vec![4_u8, 5]),
        received.and_then(|value| value.get::<Vec<u8>>())
    );
    mock.verify().unwrap();
}

#[test]
fn expectations_are_not_shared_between_types() {
    let first = MockType::default();
    let second = MockType::default();

    let obj = first.instantiate(args![]);
    let _ = obj.method("run").complete(args![]);

    assert!(first.verify().is_err());
    assert!(second.verify().is_ok());
}

#[test]
#[should_panic]
fn unmet_expectation_fails_the_test() {
    let mock = MockType::new("runner", [Call::constructor(), Call::new("run")]);

    let _ = mock.instantiate(args![]);

    mock.verify().unwrap();
}
