use std::cell::{Cell, RefCell};
use std::rc::Rc;

use seqmock::{args, Args, Call, MockType, Value};

#[test]
fn executed_once_with_actual_arguments() {
    let sum = Rc::new(Cell::new(0_i32));
    let count = Rc::new(Cell::new(0));

    let (s, c) = (sum.clone(), count.clone());
    let mock = MockType::new(
        "calculator",
        [
            Call::constructor(),
            Call::new("add")
                .with_args(args![1, 2, 3])
                .and_execute(move |args: &Args| {
                    c.set(c.get() + 1);
                    s.set(args.iter().filter_map(|arg| arg.as_value()?.get::<i32>()).sum());
                })
                .and_return(6),
        ],
    );

    let obj = mock.instantiate(args![]);
    let ret = obj.method("add").complete(args![1, 2, 3]);

    assert_eq!(Some(Value::new(6)), ret);
    assert_eq!(6, sum.get());
    assert_eq!(1, count.get());
}

#[test]
fn executed_before_the_return_value_is_produced() {
    let order = Rc::new(RefCell::new(Vec::new()));

    let log = order.clone();
    let mock = MockType::new(
        "calculator",
        [
            Call::constructor(),
            Call::new("add").and_execute(move |_: &Args| log.borrow_mut().push("side effect")),
        ],
    );

    let obj = mock.instantiate(args![]);
    let _ = obj.method("add").complete(args![]);
    order.borrow_mut().push("returned");

    assert_eq!(vec!["side effect", "returned"], *order.borrow());
}

#[test]
fn not_executed_on_mismatch() {
    let executed = Rc::new(Cell::new(false));

    let flag = executed.clone();
    let mock = MockType::new(
        "calculator",
        [
            Call::constructor(),
            Call::new("add")
                .with_args(args![1])
                .and_execute(move |_: &Args| flag.set(true)),
        ],
    );

    let obj = mock.instantiate(args![]);
    let _ = obj.method("add").complete(args![2]);

    assert!(!executed.get());
}
