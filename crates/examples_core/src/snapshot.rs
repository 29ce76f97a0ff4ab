//! The shipped example manifest.
//!
//! These tables are the raw textual tuples exactly as the manifest spells them, so they can be compared against
//! `test/examples-to-run.py` and rendered back into it. Use [`crate::ExampleRegistry::builtin`] for typed access.
//!
//! ## Notes
//! - Tuple types pin the arity: compiled entries always have three fields, script entries two.
//! - Order is significant only for reporting; the harness reports results in this order.

/// A raw compiled-example entry: `(example_name, do_run, do_valgrind_run)`.
pub type RawCompiledEntry = (&'static str, &'static str, &'static str);

/// A raw script-example entry: `(example_name, do_run)`.
pub type RawScriptEntry = (&'static str, &'static str);

/// Manifest variable holding the compiled-example list.
pub const COMPILED_LIST_NAME: &str = "cpp_examples";

/// Manifest variable holding the script-example list.
pub const SCRIPT_LIST_NAME: &str = "python_examples";

/// Compiled examples to keep buildable and runnable.
pub const COMPILED_EXAMPLES: &[RawCompiledEntry] = &[
    ("mobility-buildings-example", "True", "True"),
    (
        "lena-radio-link-failure-netsimulyzer --simTime=20 --numberOfEnbs=2 --visual=true",
        "True",
        "True",
    ),
    ("outdoor-random-walk-example-netsimulyzer", "True", "True"),
    (
        "wifi-bianchi-netsimulyzer --trials=1 --nMinStas=10 --nMaxStas=10 --visual=true",
        "True",
        "True",
    ),
];

/// Script examples to keep runnable.
pub const SCRIPT_EXAMPLES: &[RawScriptEntry] = &[];
