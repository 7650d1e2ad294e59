//! End-to-end compilation through the `kettle` facade.

use kettle::tracing_config::{LogFormat, init_tracing};
use kettle::{CatchClause, EmitConfig, EmitError, Node, compile_program, compile_program_with};

fn counter_program() -> Node {
    Node::sequence(vec![
        Node::comment(vec!["count the even numbers".to_string()]),
        Node::assign(Node::value("count"), Node::number(0)),
        Node::for_in(
            Node::if_then(
                Node::op("is", Node::op("%", Node::value("n"), Node::number(2)), Node::number(0)),
                Node::assign(Node::value("count"), Node::op("+", Node::value("count"), Node::number(1))),
            ),
            "n",
            Node::array(vec![Node::number(1), Node::number(2), Node::number(4)]),
        ),
        Node::value("count"),
    ])
}

#[test]
fn test_compile_counter_program() {
    let output = compile_program(&counter_program()).expect("compile should succeed");
    assert_eq!(
        output,
        "(function(){\n  \
         // count the even numbers\n  \
         var count = 0;\n  \
         var __a = [1, 2, 4];\n  \
         for (var __b = 0, __c = __a.length; __b < __c; __b++) {\n    \
         var n = __a[__b];\n    \
         if ((n % 2) === 0) {\n      \
         count = count + 1;\n    \
         }\n  \
         }\n  \
         return count;\n\
         })();"
    );
}

#[test]
fn test_compile_function_with_guard() {
    let program = Node::sequence(vec![
        Node::assign(
            Node::value("safe"),
            Node::code(
                vec!["f".to_string()],
                Node::try_catch(
                    Node::call(Node::value("f"), vec![]),
                    Some(CatchClause::new(
                        "err",
                        Node::object(vec![Node::property("error", Node::value("err"))]),
                    )),
                    None,
                ),
            ),
        ),
        Node::call(Node::value("safe"), vec![Node::value("run")]),
    ]);
    let output = compile_program(&program).expect("compile should succeed");
    assert_eq!(
        output,
        "(function(){\n  \
         var safe = function(f) {\n    \
         try {\n      \
         return f();\n    \
         } catch (err) {\n      \
         return {\n        \
         error: err\n      \
         };\n    \
         }\n  \
         };\n  \
         return safe(run);\n\
         })();"
    );
}

#[test]
fn test_compile_with_bare_config() {
    let config = EmitConfig::from_json(r#"{"wrap": false}"#).expect("valid config");
    let output = compile_program_with(&counter_program(), &config).expect("compile should succeed");
    assert!(output.starts_with("// count the even numbers\nvar count = 0;"), "{output}");
    assert!(output.ends_with("}\ncount;"), "{output}");
}

#[test]
fn test_compile_reports_depth_limit() {
    let mut node = Node::value("x");
    for _ in 0..8 {
        node = Node::call(Node::value("f"), vec![node]);
    }
    let config = EmitConfig {
        max_depth: 5,
        ..EmitConfig::default()
    };
    let result = compile_program_with(&node, &config);
    assert!(
        matches!(result, Err(EmitError::RecursionLimit { limit: 5, .. })),
        "got {result:?}"
    );
}

#[test]
fn test_compile_is_deterministic() {
    let program = counter_program();
    let first = compile_program(&program).expect("first");
    let second = compile_program(&program).expect("second");
    assert_eq!(first, second);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
    assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::parse("text"), LogFormat::Text);
    assert_eq!(LogFormat::parse(""), LogFormat::Text);
    assert_eq!(LogFormat::parse("fancy"), LogFormat::Text);
}

#[test]
fn test_init_tracing_without_env_is_noop() {
    if std::env::var("KETTLE_LOG").is_err() && std::env::var("RUST_LOG").is_err() {
        assert!(!init_tracing());
    }
}
