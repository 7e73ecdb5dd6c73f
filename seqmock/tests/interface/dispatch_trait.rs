use seqmock::{args, dispatch, Call, MockObject, MockType, VerificationFailure};

trait Runner {
    fn run(&self, a: i32, b: i32) -> bool;
    fn greet(&self, name: &str) -> String;
    fn stop(&mut self);
    fn finish(self) -> usize;
}

dispatch! {
    impl Runner for MockObject {
        fn run(&self, a: i32, b: i32) -> bool;

        fn greet(&self, name: &str) -> String;

        #[seqmock(name = "halt")]
        fn stop(&mut self);

        fn finish(self) -> usize {
            self.calls().len()
        }
    }
}

fn mock() -> MockType {
    MockType::new(
        "runner",
        [
            Call::constructor(),
            Call::new("run").with_args(args![1, 2]).and_return(true),
            Call::new("greet").with_args(args!["world"]).and_return(String::from("hello world")),
            Call::new("halt"),
        ],
    )
}

#[test]
fn methods_are_dispatched() {
    let mock = mock();
    let mut obj = mock.instantiate(args![]);

    assert!(obj.run(1, 2));
    assert_eq!("hello world", obj.greet("world"));
    obj.stop();

    assert_eq!(4, obj.finish());
    mock.verify().unwrap();
}

#[test]
fn unmatched_call_returns_default() {
    let mock = mock();
    let obj = mock.instantiate(args![]);

    assert!(!obj.run(2, 1));
    assert_eq!("", obj.greet("moon"));

    assert!(matches!(
        mock.verify(),
        Err(VerificationFailure::ArgumentMismatch { index: 1, .. })
    ));
}

#[test]
fn renamed_method_is_recorded_under_its_new_name() {
    let mock = MockType::new("runner", [Call::constructor(), Call::new("stop")]);
    let mut obj = mock.instantiate(args![]);

    obj.stop();

    let err = mock.verify().unwrap_err();

    assert_eq!(
        "Call Mismatch at #1: Expected <stop>, Was <halt>",
        err.to_string()
    );
}

fn use_runner(runner: &dyn Runner) -> bool {
    runner.run(3, 4)
}

#[test]
fn usable_as_trait_object() {
    let mock = MockType::new(
        "runner",
        [
            Call::constructor(),
            Call::new("run").with_args(args![3, 4]).and_return(true),
        ],
    );
    let obj = mock.instantiate(args![]);

    assert!(use_runner(&obj));
    mock.verify().unwrap();
}
