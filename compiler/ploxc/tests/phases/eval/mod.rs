//! Programs that run to completion, and runtime failures.

use plox_diagnostic::ErrorCode;
use plox_eval::ErrorCategory;
use ploxc::RunError;
use pretty_assertions::assert_eq;

use crate::common::{assert_fails_with, run_fail, run_ok};

#[test]
fn arithmetic_precedence() {
    assert_eq!(run_ok("print 1 + 2 * 3;"), "7\n");
    assert_eq!(run_ok("print 8 - 2 - 1;"), "5\n");
    assert_eq!(run_ok("print 7 / 2;"), "3.5\n");
    assert_eq!(run_ok("print 1 << 4 | 1;"), "17\n");
}

#[test]
fn block_shadowing() {
    assert_eq!(
        run_ok("var x = 10; { var x = 20; print x; } print x;"),
        "20\n10\n"
    );
}

#[test]
fn function_call() {
    assert_eq!(
        run_ok("fun add(a, b) { return a + b; } print add(2, 3);"),
        "5\n"
    );
}

#[test]
fn closure_counter() {
    let source = "
        fun make() {
            var n = 0;
            fun inc() { n = n + 1; return n; }
            return inc;
        }
        var f = make();
        print f();
        print f();
    ";
    assert_eq!(run_ok(source), "1\n2\n");
}

#[test]
fn fibonacci() {
    let source = "
        fun fib(n) {
            if (n < 2) return n;
            return fib(n - 1) + fib(n - 2);
        }
        var i = 0;
        while (i < 10) {
            print fib(i);
            i = i + 1;
        }
    ";
    assert_eq!(run_ok(source), "0\n1\n1\n2\n3\n5\n8\n13\n21\n34\n");
}

#[test]
fn nested_loops_with_break() {
    let source = "
        var i = 0;
        while (i < 3) {
            var j = 0;
            while (true) {
                if (j == 2) break;
                print i * 10 + j;
                j = j + 1;
            }
            i = i + 1;
        }
    ";
    assert_eq!(run_ok(source), "0\n1\n10\n11\n20\n21\n");
}

#[test]
fn anonymous_functions() {
    let source = "
        fun twice(f, x) { return f(f(x)); }
        print twice(fun (n) { return n * 3; }, 2);
        print fun () {};
    ";
    assert_eq!(run_ok(source), "18\n<fn>\n");
}

#[test]
fn classes_and_fields() {
    let source = "
        class Point {}
        var p = Point();
        p.x = 3;
        p.y = 4;
        print sqrt(p.x * p.x + p.y * p.y);
        print p;
        print Point;
    ";
    assert_eq!(run_ok(source), "5.0\n<Point instance>\n<class Point>\n");
}

#[test]
fn strings() {
    assert_eq!(
        run_ok("var s = \"ab\" + \"cd\"; print s; print \"-\" * 3;"),
        "abcd\n---\n"
    );
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let mut session = ploxc::Session::with_print_handler(plox_eval::buffer_handler());
    let err = session.run_source("print 1; print 1 / 0; print 2;").unwrap_err();
    assert_eq!(session.output(), "1\n");
    assert_eq!(err.exit_code(), 69);
}

#[test]
fn runtime_errors_exit_69() {
    assert_fails_with("print 1 + \"a\";", ErrorCode::E6001, 69);
    assert_fails_with("print 1 / 0;", ErrorCode::E6002, 69);
    assert_fails_with("var x = 1; x();", ErrorCode::E6004, 69);
    assert_fails_with("fun f(a) {} f();", ErrorCode::E6005, 69);
    assert_fails_with("return 1;", ErrorCode::E6006, 69);
    assert_fails_with("break;", ErrorCode::E6007, 69);
    assert_fails_with("var n = 1; print n.x;", ErrorCode::E6008, 69);
    assert_fails_with("class A {} print A().missing;", ErrorCode::E6009, 69);
    assert_fails_with("print 9223372036854775807 + 1;", ErrorCode::E6010, 69);
    assert_fails_with("print 1 << 64;", ErrorCode::E6011, 69);
    assert_fails_with("print \"abc\" * 9223372036854775807;", ErrorCode::E6013, 69);
}

#[test]
fn name_errors_exit_70() {
    assert_fails_with("print missing;", ErrorCode::E6003, 70);
    assert_fails_with("missing = 1;", ErrorCode::E6003, 70);
}

#[test]
fn runaway_recursion_fails_cleanly() {
    assert_fails_with("fun f() { return f(); } f();", ErrorCode::E6012, 69);
}

#[test]
fn arity_message() {
    let err = run_fail("fun add(a, b) { return a + b; } add(1);");
    let RunError::Eval(eval) = &err else {
        panic!("expected a runtime error, got {err}");
    };
    assert_eq!(eval.category(), ErrorCategory::TypeError);
    assert_eq!(err.to_string(), "TypeError: expected 2 arguments but got 1");
}
