use plox_ir::{SharedArena, SharedInterner};
use proptest::prelude::*;

use crate::{
    buffer_handler, ErrorCategory, EvalError, EvalErrorKind, Interpreter, InterpreterBuilder,
};

fn interpreter(interner: &SharedInterner) -> Interpreter {
    InterpreterBuilder::new(interner.clone())
        .print_handler(buffer_handler())
        .build()
}

fn load(interp: &mut Interpreter, source: &str) -> Result<(), EvalError> {
    let interner = interp.interner().clone();
    let tokens = plox_lexer::lex(source).expect("lex");
    let parsed = plox_parse::parse(&tokens, &interner).expect("parse");
    interp.run(&parsed.module, SharedArena::new(parsed.arena))
}

/// Run a program and return everything it printed.
fn run(source: &str) -> String {
    let interner = SharedInterner::default();
    let mut interp = interpreter(&interner);
    if let Err(err) = load(&mut interp, source) {
        panic!("unexpected runtime error: {err}");
    }
    interp.get_print_output()
}

/// Run a program that must fail; returns output so far and the error.
fn run_err(source: &str) -> (String, EvalError) {
    let interner = SharedInterner::default();
    let mut interp = interpreter(&interner);
    let err = load(&mut interp, source).expect_err("program should fail");
    (interp.get_print_output(), err)
}

mod expressions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn precedence() {
        assert_eq!(run("print 1 + 2 * 3;"), "7\n");
        assert_eq!(run("print (1 + 2) * 3;"), "9\n");
        assert_eq!(run("print 10 - 4 - 3;"), "3\n");
        assert_eq!(run("print 1 | 2 + 4;"), "7\n");
    }

    #[test]
    fn literals_and_display() {
        assert_eq!(
            run("print nil; print true; print 2.0; print 1 / 4; print \"hi\";"),
            "nil\ntrue\n2.0\n0.25\nhi\n"
        );
    }

    #[test]
    fn logical_operators_short_circuit() {
        assert_eq!(run("print nil or \"default\";"), "default\n");
        assert_eq!(run("print 0 or 1;"), "0\n");
        assert_eq!(run("print false and undefined_name;"), "false\n");
        assert_eq!(run("print true and 3;"), "3\n");
    }

    #[test]
    fn assignment_is_an_expression() {
        assert_eq!(run("var a; var b; a = b = 4; print a; print b;"), "4\n4\n");
    }

    #[test]
    fn string_operations() {
        assert_eq!(run("print \"ab\" + \"cd\"; print \"-\" * 3;"), "abcd\n---\n");
    }

    #[test]
    fn equality_of_booleans() {
        assert_eq!(run("print true == true; print true != false;"), "true\ntrue\n");
    }

    #[test]
    fn evaluating_a_literal_twice_gives_the_same_value() {
        assert_eq!(
            run("fun f() { return 42; } print f(); print f();"),
            "42\n42\n"
        );
        assert_eq!(
            run("var i = 0; while (i < 2) { print \"same\"; i = i + 1; }"),
            "same\nsame\n"
        );
    }
}

mod statements {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn block_shadowing_is_restored() {
        assert_eq!(
            run("var x = 10; { var x = 20; print x; } print x;"),
            "20\n10\n"
        );
    }

    #[test]
    fn assignment_reaches_enclosing_frame() {
        assert_eq!(run("var x = 1; { x = 2; } print x;"), "2\n");
    }

    #[test]
    fn uninitialized_variable_is_nil() {
        assert_eq!(run("var x; print x;"), "nil\n");
    }

    #[test]
    fn if_else() {
        assert_eq!(
            run("if (1 < 2) print \"yes\"; else print \"no\"; if (nil) print \"x\";"),
            "yes\n"
        );
        assert_eq!(run("if (false) print 1; else print 2;"), "2\n");
    }

    #[test]
    fn while_loop() {
        assert_eq!(
            run("var i = 0; while (i < 3) { print i; i = i + 1; }"),
            "0\n1\n2\n"
        );
    }

    #[test]
    fn break_exits_nearest_loop() {
        let source = "
            var i = 0;
            while (true) {
                var j = 0;
                while (true) { j = j + 1; if (j == 2) break; }
                i = i + j;
                if (i >= 6) break;
            }
            print i;
        ";
        assert_eq!(run(source), "6\n");
    }

    #[test]
    fn break_operand_does_not_change_behavior() {
        assert_eq!(
            run("var n = 0; while (true) { n = n + 1; break false; } print n;"),
            "1\n"
        );
    }

    #[test]
    fn statements_run_in_source_order() {
        assert_eq!(run("print 1; print 2; print 3;"), "1\n2\n3\n");
    }
}

mod functions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn call_and_return() {
        assert_eq!(
            run("fun add(a, b) { return a + b; } print add(2, 3);"),
            "5\n"
        );
    }

    #[test]
    fn no_return_yields_nil() {
        assert_eq!(run("fun f() { } print f();"), "nil\n");
    }

    #[test]
    fn arity_mismatch() {
        let (_, err) = run_err("fun add(a, b) { return a + b; } add(1);");
        assert_eq!(err.message(), "expected 2 arguments but got 1");
        assert_eq!(err.category(), ErrorCategory::TypeError);
    }

    #[test]
    fn closures_share_their_frame() {
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
        assert_eq!(run(source), "1\n2\n");
    }

    #[test]
    fn separate_closures_get_separate_frames() {
        let source = "
            fun make() { var n = 0; return fun () { n = n + 1; return n; }; }
            var a = make();
            var b = make();
            a(); a();
            print a();
            print b();
        ";
        assert_eq!(run(source), "3\n1\n");
    }

    #[test]
    fn recursion() {
        let source = "
            fun fib(n) { if (n < 2) return n; return fib(n - 1) + fib(n - 2); }
            print fib(15);
        ";
        assert_eq!(run(source), "610\n");
    }

    #[test]
    fn call_frame_parent_is_the_closure_not_the_caller() {
        let source = "
            var x = \"global\";
            fun show() { print x; }
            fun caller() { var x = \"local\"; show(); }
            caller();
        ";
        assert_eq!(run(source), "global\n");
    }

    #[test]
    fn return_unwinds_blocks_and_restores_scope() {
        let source = "
            var x = \"outer\";
            fun f() { { var x = \"inner\"; while (true) { return x; } } }
            print f();
            print x;
        ";
        assert_eq!(run(source), "inner\nouter\n");
    }

    #[test]
    fn chained_calls() {
        assert_eq!(
            run("fun k(a) { return fun (b) { return a - b; }; } print k(10)(3);"),
            "7\n"
        );
    }

    #[test]
    fn display_of_functions() {
        assert_eq!(
            run("fun f() {} print f; print fun () {}; print sqrt;"),
            "<fn f>\n<fn>\n<native fn sqrt>\n"
        );
    }

    #[test]
    fn native_sqrt() {
        assert_eq!(run("print sqrt(16);"), "4.0\n");
    }

    #[test]
    fn calling_a_non_function() {
        let (_, err) = run_err("var x = 1; x();");
        assert_eq!(err.kind, EvalErrorKind::NotCallable { type_name: "int" });
    }

    #[test]
    fn runaway_recursion_is_stopped() {
        let (_, err) = run_err("fun f(n) { return f(n + 1); } f(0);");
        assert_eq!(err.category(), ErrorCategory::RuntimeError);
        assert!(matches!(err.kind, EvalErrorKind::StackOverflow { .. }));
    }
}

mod classes {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn instances_hold_fields() {
        let source = "
            class Point { }
            var p = Point();
            p.x = 1;
            p.y = p.x + 1;
            print p.y;
            print p;
            print Point;
        ";
        assert_eq!(run(source), "2\n<Point instance>\n<class Point>\n");
    }

    #[test]
    fn set_returns_the_value() {
        assert_eq!(run("class A {} var a = A(); print a.v = 5;"), "5\n");
    }

    #[test]
    fn instances_are_distinct() {
        assert_eq!(
            run("class A {} var a = A(); var b = A(); print a == b; print a == a;"),
            "false\ntrue\n"
        );
    }

    #[test]
    fn undefined_property() {
        let (_, err) = run_err("class A {} var a = A(); print a.missing;");
        assert_eq!(err.message(), "undefined property 'missing'");
    }

    #[test]
    fn property_on_non_instance() {
        let (_, err) = run_err("var n = 3; n.x = 1;");
        assert_eq!(err.kind, EvalErrorKind::NotAnInstance { type_name: "int" });
    }

    #[test]
    fn class_takes_no_arguments() {
        let (_, err) = run_err("class A {} A(1);");
        assert_eq!(err.kind, EvalErrorKind::ArityMismatch { expected: 0, got: 1 });
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn type_error_aborts_program() {
        let (out, err) = run_err("print 1; print 1 + \"a\"; print 2;");
        assert_eq!(out, "1\n");
        assert_eq!(err.category(), ErrorCategory::TypeError);
        assert_eq!(err.message(), "unsupported operand type(s) for +: int and str");
    }

    #[test]
    fn division_by_zero() {
        let (_, err) = run_err("print 1/0;");
        assert_eq!(err.category(), ErrorCategory::DivisionByZeroError);
    }

    #[test]
    fn undefined_names_are_name_errors() {
        let (_, read) = run_err("print nope;");
        assert_eq!(read.category(), ErrorCategory::NameError);
        assert_eq!(read.message(), "undefined variable 'nope'");

        let (_, write) = run_err("nope = 1;");
        assert_eq!(write.category(), ErrorCategory::NameError);
    }

    #[test]
    fn errors_carry_the_failing_span() {
        let source = "var a = 1;\nprint a + nil;";
        let (_, err) = run_err(source);
        let span = err.span.expect("span");
        assert_eq!(&source[span.to_range()], "a + nil");
    }

    #[test]
    fn return_at_top_level() {
        let (_, err) = run_err("return 1;");
        assert_eq!(err.kind, EvalErrorKind::ReturnOutsideFunction);
    }

    #[test]
    fn break_outside_loop() {
        let (_, top) = run_err("break;");
        assert_eq!(top.kind, EvalErrorKind::BreakOutsideLoop);

        let (_, in_fn) = run_err("fun f() { break; } while (true) { f(); }");
        assert_eq!(in_fn.kind, EvalErrorKind::BreakOutsideLoop);
    }

    #[test]
    fn scope_is_restored_after_an_error() {
        let interner = SharedInterner::default();
        let mut interp = interpreter(&interner);
        let before = interp.dump_env();
        assert!(load(&mut interp, "{ { var x = 1; x(); } }").is_err());
        assert_eq!(interp.dump_env(), before);
        assert!(load(&mut interp, "var y = 2; { nil(); }").is_err());
        assert!(interp.dump_env().starts_with("frame 0: y = 2\nframe 1 (global)"));
        assert!(load(&mut interp, "fun f() { { nil(); } } f();").is_err());
        assert!(interp
            .dump_env()
            .starts_with("frame 0: f = <fn f>, y = 2\nframe 1 (global)"));
    }
}

mod session {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn state_persists_across_runs() {
        let interner = SharedInterner::default();
        let mut interp = interpreter(&interner);
        load(&mut interp, "var count = 1; fun bump() { count = count + 1; }").unwrap();
        load(&mut interp, "bump(); bump();").unwrap();
        load(&mut interp, "print count;").unwrap();
        assert_eq!(interp.get_print_output(), "3\n");
    }

    #[test]
    fn functions_outlive_the_source_that_declared_them() {
        let interner = SharedInterner::default();
        let mut interp = interpreter(&interner);
        load(&mut interp, "fun greet(who) { return \"hi \" + who; }").unwrap();
        load(&mut interp, "var unrelated = 1 + 2 + 3;").unwrap();
        load(&mut interp, "print greet(\"there\");").unwrap();
        assert_eq!(interp.get_print_output(), "hi there\n");
    }

    #[test]
    fn dump_env_shows_frames() {
        let interner = SharedInterner::default();
        let mut interp = interpreter(&interner);
        load(&mut interp, "var a = 1;").unwrap();
        assert_eq!(
            interp.dump_env(),
            "frame 0: a = 1\nframe 1 (global): clock = <native fn clock>, sqrt = <native fn sqrt>\n"
        );
    }

    #[test]
    fn builder_globals() {
        let interner = SharedInterner::default();
        let mut interp = InterpreterBuilder::new(interner.clone())
            .print_handler(buffer_handler())
            .global("answer", crate::Value::int(42))
            .build();
        load(&mut interp, "print answer;").unwrap();
        assert_eq!(interp.get_print_output(), "42\n");
    }
}

proptest! {
    #[test]
    fn int_arithmetic_matches_host(a in -10_000i64..10_000, b in -10_000i64..10_000) {
        let out = run(&format!("print {a} + ({b}); print {a} * ({b}); print {a} - ({b});"));
        prop_assert_eq!(out, format!("{}\n{}\n{}\n", a + b, a * b, a - b));
    }

    #[test]
    fn comparison_matches_host(a in -1_000i64..1_000, b in -1_000i64..1_000) {
        let out = run(&format!("print {a} < ({b}); print {a} == ({b});"));
        prop_assert_eq!(out, format!("{}\n{}\n", a < b, a == b));
    }
}
