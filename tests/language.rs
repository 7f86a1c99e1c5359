use std::{fs, path::Path};

use frog::{
    error::{FrogError, ParseError, RuntimeErrorKind},
    interpreter::{evaluator::core::Context, value::core::Value},
    run_with_io,
};
use walkdir::WalkDir;

#[test]
fn sample_programs_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "frg"))
    {
        let path = entry.path();
        let expected_path = path.with_extension("out");
        if !expected_path.exists() {
            continue;
        }
        count += 1;

        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });
        let actual = run_file(path);
        assert_eq!(actual, expected, "Output of {path:?} differs");
    }

    assert!(count > 0, "No sample programs found in tests/programs");
}

fn run_file(path: &Path) -> String {
    let program =
        frog::parse_file(path).unwrap_or_else(|e| panic!("Program {path:?} failed to parse:\n{e}"));
    let mut output = Vec::new();
    if let Err(e) = frog::run_program(&program, "".as_bytes(), &mut output) {
        panic!("Program {path:?} failed: {e}");
    }
    String::from_utf8(output).expect("output is UTF-8")
}

fn program(body: &str) -> String {
    format!("FRG_Begin\n{body}\nFRG_End\n")
}

fn assert_output(body: &str, input: &str, expected: &str) {
    let mut output = Vec::new();
    if let Err(e) = run_with_io(&program(body), input.as_bytes(), &mut output) {
        panic!("Program failed: {e}\n{body}");
    }
    assert_eq!(String::from_utf8(output).expect("output is UTF-8"), expected, "\n{body}");
}

fn assert_runtime_error(body: &str, expected: &RuntimeErrorKind) {
    match run_with_io(&program(body), "".as_bytes(), Vec::new()) {
        Err(FrogError::Runtime(error)) => assert_eq!(&error.kind, expected, "\n{body}"),
        Err(e) => panic!("Expected a runtime error, got: {e}"),
        Ok(()) => panic!("Program succeeded but was expected to fail:\n{body}"),
    }
}

fn parse_errors(source: &str) -> Vec<ParseError> {
    match frog::parse(source) {
        Err(FrogError::Parse(diagnostics)) => diagnostics.0,
        Err(e) => panic!("Expected parse errors, got: {e}"),
        Ok(_) => panic!("Program parsed but was expected to fail:\n{source}"),
    }
}

#[test]
fn assignment_and_integer_arithmetic() {
    assert_output("FRG_Int a # a := 2 + 3 * 4 # FRG_Print a #", "", "14\n");
    assert_output("FRG_Int a # a := (2 + 3) * 4 # FRG_Print a #", "", "20\n");
    assert_output("FRG_Print 10 - 4 - 3 #", "", "3\n");
    assert_output("FRG_Print 7 % 3 #", "", "1\n");
    assert_output("FRG_Print -3 + 1 #", "", "-2\n");
}

#[test]
fn integer_division_produces_a_real() {
    assert_output("FRG_Print 7 / 2 #", "", "3.500000\n");
    assert_output("FRG_Print 6 / 3 #", "", "2.000000\n");
}

#[test]
fn real_arithmetic_prints_six_decimals() {
    assert_output("FRG_Real r # r := 1.5 + 2.25 # FRG_Print r #", "", "3.750000\n");
    assert_output("FRG_Print -0.5 * 3.0 #", "", "-1.500000\n");
    assert_output("FRG_Print 2. #", "", "2.000000\n");
}

#[test]
fn print_concatenates_values_and_ends_the_line() {
    assert_output("FRG_Print \"a\", 1, \"b\" #", "", "a1b\n");
    assert_output("FRG_Print \"tab\\there\" #\nFRG_Print \"q\\\"\" #", "", "tab\there\nq\"\n");
}

#[test]
fn unassigned_scalar_prints_null() {
    assert_output("FRG_Int x # FRG_Print x #", "", "null\n");
    assert_output("FRG_Int x # If [x] FRG_Print \"set\" # Else FRG_Print \"unset\" #",
                  "",
                  "unset\n");
}

#[test]
fn comparisons_and_booleans() {
    assert_output("FRG_Print 1 < 2, 2 == 3 #", "", "truefalse\n");
    assert_output("FRG_Print 2.5 >= 2.5, 1 != 1 #", "", "truefalse\n");
    assert_output("FRG_Print True, False #", "", "truefalse\n");
}

#[test]
fn zero_and_empty_values_are_truthy() {
    assert_output("If [0] FRG_Print \"yes\" # Else FRG_Print \"no\" #", "", "yes\n");
    assert_output("If [\"\"] FRG_Print \"yes\" # Else FRG_Print \"no\" #", "", "yes\n");
    assert_output("If [False] FRG_Print \"yes\" # Else FRG_Print \"no\" #", "", "no\n");
}

#[test]
fn if_else_with_blocks() {
    assert_output("If [1 > 2] Begin FRG_Print \"yes\" # End Else Begin FRG_Print \"no\" # End",
                  "",
                  "no\n");
    assert_output("FRG_Int x # x := 5 #\nIf [x > 2] Begin\n  FRG_Print \"big\" #\n  x := 0 #\nEnd\nFRG_Print x #",
                  "",
                  "big\n0\n");
}

#[test]
fn repeat_runs_until_condition_holds() {
    assert_output("FRG_Int i #\ni := 0 #\nRepeat\n  i := i + 1 #\n  FRG_Print i #\nUntil [i == 3]",
                  "",
                  "1\n2\n3\n");
}

#[test]
fn repeat_body_runs_at_least_once() {
    assert_output("Repeat FRG_Print \"once\" # Until [True]", "", "once\n");
}

#[test]
fn break_leaves_the_loop() {
    assert_output("FRG_Int i #\ni := 0 #\nRepeat\n  i := i + 1 #\n  If [i == 2] Break #\n  FRG_Print i #\nUntil [i == 5]\nFRG_Print \"after\" #",
                  "",
                  "1\nafter\n");
}

#[test]
fn continue_skips_to_the_condition() {
    assert_output("FRG_Int i #\ni := 0 #\nRepeat\n  i := i + 1 #\n  If [i == 2] Continue #\n  FRG_Print i #\nUntil [i >= 3]",
                  "",
                  "1\n3\n");
}

#[test]
fn break_skips_the_until_condition() {
    assert_output("Repeat Break # FRG_Print 1 # Until [undefined]\nFRG_Print \"after\" #",
                  "",
                  "after\n");
}

#[test]
fn break_inside_a_block_reaches_the_loop() {
    assert_output("FRG_Int i #\ni := 0 #\nRepeat\n  Begin\n    i := i + 1 #\n    Break #\n    FRG_Print \"unreachable\" #\n  End\nUntil [False]\nFRG_Print i #",
                  "",
                  "1\n");
}

#[test]
fn break_outside_a_loop_ends_the_program() {
    assert_output("FRG_Print 1 # Break # FRG_Print 2 #", "", "1\n");
}

#[test]
fn identifiers_may_use_any_letter() {
    assert_output("FRG_Int año # año := 3 # FRG_Print año #", "", "3\n");
}

#[test]
fn declarations_bind_every_name() {
    let program = frog::parse(&program("FRG_Int a, b # FRG_Real[] xs #")).expect("program parses");
    let mut context = Context::new("".as_bytes(), Vec::new());
    assert!(context.env.is_empty());

    context.eval_program(&program).expect("program runs");

    assert_eq!(context.env.len(), 3);
    assert_eq!(context.env.get("a"), Some(&Value::Null));
    assert_eq!(context.env.get("xs"), Some(&Value::from(Vec::new())));
}

#[test]
fn arrays_grow_on_write() {
    assert_output("FRG_Int[] xs # xs[3] := 9 # FRG_Print xs #", "", "[0, 0, 0, 9]\n");
    assert_output("FRG_Int[] xs # FRG_Print xs #", "", "[]\n");
}

#[test]
fn array_literals_and_sized_arrays() {
    assert_output("FRG_Int[] xs # xs := {1, 2, 3} # FRG_Print xs[1] #", "", "2\n");
    assert_output("FRG_Int[] xs # xs := [3] # FRG_Print xs #", "", "[0, 0, 0]\n");
    assert_output("FRG_Int n # FRG_Int[] xs # n := 2 # xs := [n + 1] # xs[0] := 7 # FRG_Print xs #",
                  "",
                  "[7, 0, 0]\n");
    assert_output("FRG_Print {1, \"two\", 3.0, {4}} #", "", "[1, two, 3.000000, [4]]\n");
}

#[test]
fn arrays_are_shared_between_names() {
    assert_output("FRG_Int[] a, b # a := {1} # b := a # b[0] := 5 # FRG_Print a #", "", "[5]\n");
}

#[test]
fn strings_concatenate_and_index_by_character() {
    assert_output("FRG_Strg s # s := \"ab\" + \"cd\" # FRG_Print s, s[2] #", "", "abcdc\n");
    assert_output("FRG_Strg s # s := \"héllo\" # FRG_Print s[1] #", "", "é\n");
}

#[test]
fn input_converts_integer_real_then_string() {
    assert_output("FRG_Int a # FRG_Real b # FRG_Strg c #\nFRG_Input a, b, c #\nFRG_Print a + 1 #\nFRG_Print b * 2.0 #\nFRG_Print c #",
                  "42\n3.5\nfrog\n",
                  "43\n7.000000\nfrog\n");
}

#[test]
fn input_accepts_a_last_line_without_newline() {
    assert_output("FRG_Strg s # FRG_Input s # FRG_Print s, \"!\" #", "hi", "hi!\n");
}

#[test]
fn comments_are_ignored() {
    assert_output("## a comment\nFRG_Print 1 # ## trailing\n## FRG_Print 2 #", "", "1\n");
}

#[test]
fn function_declarations_are_accepted() {
    assert_output("FRG_Fn add(FRG_Int a, FRG_Int b) : FRG_Int Begin FRG_Print a # End\nFRG_Print \"ok\" #",
                  "",
                  "ok\n");
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let mut output = Vec::new();
    let result = run_with_io(&program("FRG_Print 1 # FRG_Print 1 / 0 # FRG_Print 2 #"),
                             "".as_bytes(),
                             &mut output);

    assert!(result.is_err());
    assert_eq!(output, b"1\n");
}

#[test]
fn division_by_zero_is_error() {
    let source = "FRG_Begin\nFRG_Int a #\na := 1 / 0 #\nFRG_End";
    match run_with_io(source, "".as_bytes(), Vec::new()) {
        Err(FrogError::Runtime(error)) => {
            assert_eq!(error.to_string(), "ERROR: u can't divis per zero (line 3, col 8)");
        },
        other => panic!("Expected division by zero, got {other:?}"),
    }

    assert_runtime_error("FRG_Print 5 % 0 #", &RuntimeErrorKind::DivisionByZero);
    assert_runtime_error("FRG_Print 1.0 / 0.0 #", &RuntimeErrorKind::DivisionByZero);
}

#[test]
fn unknown_variable_is_error() {
    assert_runtime_error("FRG_Print y #", &RuntimeErrorKind::IdentifierNotFound("y".into()));
    assert_runtime_error("y := 1 #", &RuntimeErrorKind::UndeclaredAssignment("y".into()));
    assert_runtime_error("FRG_Input y #", &RuntimeErrorKind::UndeclaredInput("y".into()));
}

#[test]
fn mixed_operand_types_are_errors() {
    assert_runtime_error("FRG_Print 1 + 1.0 #",
                         &RuntimeErrorKind::TypeMismatch { left:  "INTEGER",
                                                           op:    frog::ast::InfixOperator::Add,
                                                           right: "REAL", });
    assert_runtime_error("FRG_Print \"a\" - \"b\" #",
                         &RuntimeErrorKind::UnknownInfixOperator { left:  "STRING",
                                                                   op:    frog::ast::InfixOperator::Subtract,
                                                                   right: "STRING", });
    assert_runtime_error("FRG_Print -\"a\" #",
                         &RuntimeErrorKind::UnknownPrefixOperator { op:      frog::ast::PrefixOperator::Negate,
                                                                    operand: "STRING", });
}

#[test]
fn type_errors_have_readable_messages() {
    match run_with_io(&program("FRG_Print 1 + 1.0 #"), "".as_bytes(), Vec::new()) {
        Err(FrogError::Runtime(error)) => {
            assert_eq!(error.message(), "type mismatch: INTEGER + REAL");
        },
        other => panic!("Expected a type mismatch, got {other:?}"),
    }
}

#[test]
fn index_errors() {
    assert_runtime_error("FRG_Int[] xs # xs := {1} # FRG_Print xs[1] #",
                         &RuntimeErrorKind::IndexOutOfBounds(1));
    assert_runtime_error("FRG_Int[] xs # xs := {1} # FRG_Print xs[-1] #",
                         &RuntimeErrorKind::IndexOutOfBounds(-1));
    assert_runtime_error("FRG_Int[] xs # xs[-1] := 1 #", &RuntimeErrorKind::IndexOutOfBounds(-1));
    assert_runtime_error("FRG_Int x # x := 3 # FRG_Print x[0] #",
                         &RuntimeErrorKind::IndexNotSupported { left:  "INTEGER",
                                                                index: "INTEGER", });
}

#[test]
fn oversized_arrays_are_rejected() {
    assert_runtime_error("FRG_Int[] xs # xs := [-1] #", &RuntimeErrorKind::NegativeArraySize);
    assert_runtime_error("FRG_Int[] xs # xs := [1.5] #", &RuntimeErrorKind::ArraySizeNotInteger);
    assert_runtime_error("FRG_Int[] xs # xs := [99999999999] #",
                         &RuntimeErrorKind::ArrayTooLarge(99_999_999_999));
    assert_runtime_error("FRG_Int[] xs # xs[99999999999] := 1 #",
                         &RuntimeErrorKind::ArrayTooLarge(99_999_999_999));
}

#[test]
fn integer_overflow_is_error() {
    assert_runtime_error("FRG_Int a # a := 9223372036854775807 # FRG_Print a + 1 #",
                         &RuntimeErrorKind::IntegerOverflow);
    assert_runtime_error("FRG_Int a # a := 9223372036854775807 # FRG_Print a * 2 #",
                         &RuntimeErrorKind::IntegerOverflow);
}

#[test]
fn calling_functions_is_error() {
    assert_runtime_error("FRG_Fn add(FRG_Int a, FRG_Int b) : FRG_Int Begin FRG_Print a # End\nadd(1, 2) #",
                         &RuntimeErrorKind::FunctionNotCallable("add".into()));
    assert_runtime_error("FRG_Int x # x(1) #", &RuntimeErrorKind::NotAFunction("x".into()));
}

#[test]
fn running_out_of_input_is_error() {
    assert_runtime_error("FRG_Int a # FRG_Input a #", &RuntimeErrorKind::EndOfInput);
}

#[test]
fn missing_end_is_reported() {
    let errors = parse_errors("FRG_Begin FRG_Int a #");
    assert_eq!(errors, vec![ParseError::MissingEnd]);
}

#[test]
fn missing_begin_is_reported() {
    let errors = parse_errors("FRG_Int a # FRG_End");
    assert_eq!(errors, vec![ParseError::MissingBegin]);
}

#[test]
fn programs_with_parse_errors_do_not_run() {
    let mut output = Vec::new();
    let result = run_with_io("FRG_Begin FRG_Print 1 # FRG_Print # FRG_End",
                             "".as_bytes(),
                             &mut output);

    assert!(matches!(result, Err(FrogError::Parse(_))));
    assert!(output.is_empty());
}

#[test]
fn included_file_shares_the_environment() {
    let program = frog::parse_file("tests/programs/include/main.frg").expect("main.frg parses");
    let mut output = Vec::new();
    frog::run_program(&program, "".as_bytes(), &mut output).expect("main.frg runs");

    assert_eq!(String::from_utf8(output).expect("output is UTF-8"), "Hello, frog\n");
}

#[test]
fn cyclic_inclusion_is_reported() {
    let Err(FrogError::Parse(diagnostics)) = frog::parse_file("tests/programs/cycle/a.frg") else {
        panic!("Expected a cyclic inclusion diagnostic");
    };

    match diagnostics.errors() {
        [ParseError::InIncludedFile { file, source }] => {
            assert_eq!(file, "b.frg");
            assert!(matches!(source.as_ref(), ParseError::CyclicInclude { file, .. } if file == "a.frg"));
        },
        other => panic!("Unexpected diagnostics: {other:?}"),
    }
}

#[test]
fn self_inclusion_is_reported() {
    let Err(FrogError::Parse(diagnostics)) = frog::parse_file("tests/programs/cycle/self.frg") else {
        panic!("Expected a cyclic inclusion diagnostic");
    };

    assert!(matches!(diagnostics.errors(),
                     [ParseError::CyclicInclude { file, .. }] if file == "self.frg"));
}

#[test]
fn missing_source_file_is_io_error() {
    let result = frog::parse_file("tests/programs/does_not_exist.frg");
    assert!(matches!(result, Err(FrogError::Io { .. })));
}
