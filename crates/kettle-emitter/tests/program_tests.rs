//! Whole-program emission: wrapper, return-pushing, determinism.

use kettle_emitter::{Node, Printer};

fn emit_program(program: &Node) -> String {
    Printer::default()
        .emit_program(program)
        .expect("emit should succeed")
}

#[test]
fn test_single_assignment_program() {
    let program = Node::sequence(vec![Node::assign(Node::value("x"), Node::number(1))]);
    assert_eq!(
        emit_program(&program),
        "(function(){\n  var x = 1;\n  return x;\n})();"
    );
}

#[test]
fn test_trailing_expression_is_returned() {
    let program = Node::sequence(vec![
        Node::assign(Node::value("greeting"), Node::string("hi")),
        Node::call(Node::value("print"), vec![Node::value("greeting")]),
    ]);
    assert_eq!(
        emit_program(&program),
        "(function(){\n  var greeting = \"hi\";\n  return print(greeting);\n})();"
    );
}

#[test]
fn test_non_sequence_program_is_wrapped() {
    let program = Node::number(7);
    assert_eq!(emit_program(&program), "(function(){\n  return 7;\n})();");
}

#[test]
fn test_empty_program() {
    assert_eq!(
        emit_program(&Node::sequence(vec![])),
        "(function(){\n\n})();"
    );
}

#[test]
fn test_return_pushed_into_nested_sequences() {
    let program = Node::sequence(vec![Node::sequence(vec![
        Node::number(1),
        Node::sequence(vec![Node::number(2), Node::value("z")]),
    ])]);
    assert_eq!(
        emit_program(&program),
        "(function(){\n  1;\n  2;\n  return z;\n})();"
    );
}

#[test]
fn test_return_pushed_into_if_branches() {
    let program = Node::sequence(vec![Node::if_else(
        Node::value("a"),
        Node::sequence(vec![
            Node::call(Node::value("f"), vec![]),
            Node::number(1),
        ]),
        Node::number(2),
    )]);
    assert_eq!(
        emit_program(&program),
        "(function(){\n  \
         if (a) {\n    \
         f();\n    \
         return 1;\n  \
         } else {\n    \
         return 2;\n  \
         }\n\
         })();"
    );
}

#[test]
fn test_ternary_tail_is_returned() {
    let program = Node::sequence(vec![Node::if_else(
        Node::value("a"),
        Node::number(1),
        Node::number(2),
    )]);
    assert_eq!(
        emit_program(&program),
        "(function(){\n  return (a ? 1 : 2);\n})();"
    );
}

#[test]
fn test_return_pushed_into_try_and_catch() {
    let program = Node::sequence(vec![Node::try_catch(
        Node::call(Node::value("f"), vec![]),
        Some(kettle_emitter::CatchClause::new("e", Node::value("e"))),
        Some(Node::call(Node::value("cleanup"), vec![])),
    )]);
    assert_eq!(
        emit_program(&program),
        "(function(){\n  \
         try {\n    \
         return f();\n  \
         } catch (e) {\n    \
         return e;\n  \
         } finally {\n    \
         cleanup();\n  \
         }\n\
         })();"
    );
}

#[test]
fn test_loops_take_no_return() {
    let program = Node::sequence(vec![Node::while_loop(
        Node::value("running"),
        Node::call(Node::value("tick"), vec![]),
    )]);
    assert_eq!(
        emit_program(&program),
        "(function(){\n  while (running) {\n    tick();\n  }\n})();"
    );
}

#[test]
fn test_explicit_return_is_not_doubled() {
    let program = Node::sequence(vec![Node::ret(Node::value("x"))]);
    assert_eq!(emit_program(&program), "(function(){\n  return x;\n})();");
}

#[test]
fn test_comment_line_is_kept() {
    let program = Node::sequence(vec![
        Node::comment(vec!["setup".to_string()]),
        Node::number(1),
    ]);
    assert_eq!(
        emit_program(&program),
        "(function(){\n  // setup\n  return 1;\n})();"
    );
}

#[test]
fn test_rendering_is_deterministic() {
    let program = Node::sequence(vec![
        Node::assign(Node::value("x"), Node::number(1)),
        Node::for_in(
            Node::assign(Node::value("x"), Node::value("item")),
            "item",
            Node::value("list"),
        ),
        Node::value("x"),
    ]);
    let mut printer = Printer::default();
    let first = printer.emit_program(&program).expect("first render");
    let second = printer.emit_program(&program).expect("second render");
    assert_eq!(first, second);
    assert_eq!(first, emit_program(&program));
    assert_eq!(first.matches("var x").count(), 1, "{first}");
}

#[test]
fn test_return_of_empty_block_is_bare_return() {
    let program = Node::sequence(vec![Node::ret(Node::sequence(vec![]))]);
    assert_eq!(emit_program(&program), "(function(){\n  return;\n})();");
}

#[test]
fn test_empty_tail_block_leaves_value_undefined() {
    // The block's value is the empty block's, so no `return` is emitted.
    let program = Node::sequence(vec![Node::value("a"), Node::sequence(vec![])]);
    assert_eq!(emit_program(&program), "(function(){\n  a;\n})();");
}

#[test]
fn test_no_whitespace_only_lines() {
    let program = Node::sequence(vec![
        Node::comment(vec![]),
        Node::code(vec![], Node::ret(Node::sequence(vec![]))),
    ]);
    let output = emit_program(&program);
    assert_eq!(
        output,
        "(function(){\n  return function() {\n    return;\n  };\n})();"
    );
    assert!(
        output.lines().all(|line| line.is_empty() || !line.trim().is_empty()),
        "{output}"
    );
}
