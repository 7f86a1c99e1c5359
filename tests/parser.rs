use frog::{
    ast::{DeclType, Expr, Statement},
    error::{FrogError, ParseError},
    interpreter::{
        parser::Parser,
        printer::render_tree,
        token::{Position, TokenKind},
    },
};

fn render(body: &str) -> String {
    let source = format!("FRG_Begin\n{body}\nFRG_End");
    frog::parse(&source).unwrap_or_else(|e| panic!("Failed to parse:\n{body}\n{e}"))
                        .to_string()
}

fn errors(source: &str) -> Vec<ParseError> {
    let mut parser = Parser::new(source);
    parser.parse_program();
    parser.into_errors()
}

#[test]
fn operator_precedence_and_associativity() {
    let cases = [("FRG_Print 1 + 2 * 3 - 4 / 2 #", "FRG_Print ((1 + (2 * 3)) - (4 / 2)) #"),
                 ("FRG_Print (1 + 2) * 3 #", "FRG_Print ((1 + 2) * 3) #"),
                 ("FRG_Print a - b - c #", "FRG_Print ((a - b) - c) #"),
                 ("FRG_Print a < b == True #", "FRG_Print ((a < b) == True) #"),
                 ("FRG_Print a + b >= c * d #", "FRG_Print ((a + b) >= (c * d)) #"),
                 ("FRG_Print -a * b #", "FRG_Print ((-a) * b) #"),
                 ("FRG_Print xs[i + 1] * 2 #", "FRG_Print (xs[(i + 1)] * 2) #"),
                 ("FRG_Print a % b != 0 #", "FRG_Print ((a % b) != 0) #")];

    for (input, expected) in cases {
        assert_eq!(render(input), format!("FRG_Begin\n{expected}\nFRG_End\n"), "{input}");
    }
}

#[test]
fn statements_render_back_as_source() {
    let source = "FRG_Begin\nFRG_Int[] xs #\nFRG_Real r, s #\nxs[0] := {1, 2} #\nFRG_Input r, s #\nIf [(r > s)] FRG_Print \"r\" # Else FRG_Print \"s\\n\" #\nRepeat\nBreak #\nContinue #\nUntil [True]\nBegin\nr := [3] #\nEnd\nFRG_End\n";

    let program = frog::parse(source).expect("program parses");

    assert_eq!(program.to_string(), source);
}

#[test]
fn rendered_program_parses_to_the_same_rendering() {
    let source = "FRG_Begin FRG_Int a, b # a := -(1 + 2) * 3 # b := a % 4 # \
                  FRG_Fn f(FRG_Int x, FRG_Strg y) : FRG_Real Begin FRG_Print x, y # End \
                  Repeat a := a + 1 # Until [a >= 10 - b] FRG_End";

    let first = frog::parse(source).expect("program parses").to_string();
    let second = frog::parse(&first).expect("rendering parses").to_string();

    assert_eq!(first, second);
}

#[test]
fn declarations_collect_names_and_array_flag() {
    let program = frog::parse("FRG_Begin FRG_Strg[] a, b, c # FRG_End").expect("program parses");

    match program.statements.as_slice() {
        [Statement::Declaration { ty,
                                  is_array,
                                  names,
                                  position, }] => {
            assert_eq!(*ty, DeclType::Strg);
            assert!(*is_array);
            let names: Vec<&str> = names.iter().map(|n| n.name.as_str()).collect();
            assert_eq!(names, ["a", "b", "c"]);
            assert_eq!(*position, Position::new(1, 11));
        },
        other => panic!("Unexpected statements: {other:?}"),
    }
}

#[test]
fn function_declaration_structure() {
    let program =
        frog::parse("FRG_Begin FRG_Fn area(FRG_Real w, FRG_Real h) : FRG_Real Begin FRG_Print w * h # End FRG_End")
            .expect("program parses");

    let [Statement::FunctionDeclaration(decl)] = program.statements.as_slice() else {
        panic!("Expected one function declaration");
    };
    assert_eq!(decl.name.name, "area");
    assert_eq!(decl.params.len(), 2);
    assert_eq!(decl.params[1].name.name, "h");
    assert_eq!(decl.params[1].ty, DeclType::Real);
    assert_eq!(decl.return_type, DeclType::Real);
    assert_eq!(decl.body.len(), 1);
}

#[test]
fn function_without_parameters() {
    let program = frog::parse("FRG_Begin FRG_Fn noop() : FRG_Int Begin End FRG_End")
        .expect("program parses");

    let [Statement::FunctionDeclaration(decl)] = program.statements.as_slice() else {
        panic!("Expected one function declaration");
    };
    assert!(decl.params.is_empty());
    assert!(decl.body.is_empty());
}

#[test]
fn calls_parse_as_expressions() {
    let program = frog::parse("FRG_Begin f(1, x + 2) # FRG_End").expect("program parses");

    let [Statement::Expression { expr: Expr::Call { function, arguments, .. }, .. }] =
        program.statements.as_slice()
    else {
        panic!("Expected a call statement");
    };
    assert_eq!(function.to_string(), "f");
    assert_eq!(arguments.len(), 2);
}

#[test]
fn statements_after_missing_end_are_kept() {
    let mut parser = Parser::new("FRG_Begin FRG_Int a # a := 1 #");
    let program = parser.parse_program();

    assert_eq!(program.statements.len(), 2);
    assert_eq!(parser.errors(), [ParseError::MissingEnd]);
}

#[test]
fn diagnostics_accumulate() {
    let found = errors("FRG_Begin FRG_Int # FRG_Print # FRG_End");

    assert_eq!(found,
               [ParseError::UnexpectedToken { expected: TokenKind::Identifier,
                                              found:    TokenKind::Hash,
                                              position: Position::new(1, 19), },
                ParseError::NotAStatement { literal: "#".to_string(),
                                            line:    1,
                                            column:  19, },
                ParseError::NoPrefixRule { kind:     TokenKind::Hash,
                                           position: Position::new(1, 31), }]);
}

#[test]
fn diagnostic_messages() {
    let found = errors("FRG_Begin FRG_Int # FRG_End");

    assert_eq!(found[0].to_string(),
               "ERROR: expected next token to be IDENTIFIER, got HASH instead (line 1, col 19)");

    let Err(FrogError::Parse(diagnostics)) = frog::parse("FRG_Begin @ # FRG_End") else {
        panic!("Expected parse errors");
    };
    assert_eq!(diagnostics.to_string(),
               "\tERROR: Unexpected token '@' at line 1, column 11. Cannot parse it as a statement.\n\
                \tERROR: Unexpected token '#' at line 1, column 13. Cannot parse it as a statement.");
}

#[test]
fn lower_case_block_keyword_gets_a_hint() {
    let found = errors("FRG_Begin\nrepeat FRG_Print 1 # Until [True]\nFRG_End");

    assert!(found.contains(&ParseError::MiscapitalizedKeyword { suggestion: "Repeat",
                                                                position:   Position::new(2, 1), }),
            "{found:?}");
}

#[test]
fn lower_case_keyword_as_variable_is_fine() {
    assert!(errors("FRG_Begin FRG_Int end # end := 1 # FRG_End").is_empty());
}

#[test]
fn only_names_and_indices_are_assignable() {
    let found = errors("FRG_Begin FRG_Int a # a + 1 := 2 # FRG_End");

    assert_eq!(found,
               [ParseError::InvalidAssignmentTarget { target:   "(a + 1)".to_string(),
                                                      position: Position::new(1, 29), }]);
}

#[test]
fn unterminated_block_is_reported() {
    let found = errors("FRG_Begin Begin FRG_Print 1 #");

    assert!(matches!(found.as_slice(),
                     [ParseError::UnterminatedBlock { found: TokenKind::Eof, .. },
                      ParseError::MissingEnd]),
            "{found:?}");
}

#[test]
fn repeat_without_until_is_reported() {
    let found = errors("FRG_Begin Repeat FRG_Print 1 # FRG_End");

    assert!(found.iter()
                 .any(|e| matches!(e, ParseError::UnexpectedToken { expected: TokenKind::Until, .. })),
            "{found:?}");
}

#[test]
fn oversized_integer_literal_is_reported() {
    let found = errors("FRG_Begin FRG_Print 99999999999999999999 # FRG_End");

    assert!(matches!(found.first(), Some(ParseError::InvalidInteger { .. })), "{found:?}");
}

#[test]
fn logical_operators_have_no_parse_rule() {
    let found = errors("FRG_Begin FRG_Print !True # FRG_End");

    assert!(matches!(found.first(), Some(ParseError::NoPrefixRule { kind: TokenKind::Not, .. })),
            "{found:?}");
}

#[test]
fn missing_included_file_is_reported() {
    let found = errors("FRG_Begin FRG_Use \"tests/programs/nowhere.frg\" # FRG_End");

    assert!(matches!(found.as_slice(), [ParseError::UnreadableInclude { .. }]), "{found:?}");
}

#[test]
fn include_without_origin_resolves_from_working_directory() {
    let program = frog::parse("FRG_Begin FRG_Use \"tests/programs/include/greeting.frg\" # FRG_End")
        .expect("program parses");

    let [Statement::Use { file, statements, .. }] = program.statements.as_slice() else {
        panic!("Expected one use statement");
    };
    assert_eq!(file, "tests/programs/include/greeting.frg");
    assert_eq!(statements.len(), 3);
}

#[test]
fn tree_view_of_control_flow() {
    let program = frog::parse("FRG_Begin If [x] FRG_Print 1 # Else Break # FRG_End")
        .expect("program parses");

    assert_eq!(render_tree(&program),
               "└── Program:\n\
               \x20   └── IfStatement:\n\
               \x20       ├── Identifier: x\n\
               \x20       ├── PrintStatement:\n\
               \x20       │   └── IntegerLiteral: 1\n\
               \x20       └── BreakStatement\n");
}

#[test]
fn if_without_a_statement_leaves_frg_end_in_place() {
    let found = errors("FRG_Begin If [1] FRG_End");

    assert_eq!(found,
               [ParseError::NotAStatement { literal: "FRG_End".to_string(),
                                            line:    1,
                                            column:  18, }]);
}

#[test]
fn else_without_a_statement_leaves_frg_end_in_place() {
    let found = errors("FRG_Begin If [1] FRG_Print 1 # Else FRG_End");

    assert!(!found.contains(&ParseError::MissingEnd), "{found:?}");
    assert!(matches!(found.as_slice(), [ParseError::NotAStatement { literal, .. }] if literal == "FRG_End"),
            "{found:?}");
}

#[test]
fn statement_positions() {
    let program = frog::parse("FRG_Begin\nFRG_Int a #\n  a := 1 #\nIf [a] Break #\nFRG_End")
        .expect("program parses");
    let positions: Vec<Position> = program.statements.iter().map(Statement::position).collect();

    assert_eq!(positions, [Position::new(2, 1), Position::new(3, 5), Position::new(4, 1)]);
}
