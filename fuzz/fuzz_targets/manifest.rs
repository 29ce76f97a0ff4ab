#![no_main]

use examples_to_run::render::manifest;
use examples_to_run::{LoadConfig, load_manifest_str};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    let config = LoadConfig::default();

    match load_manifest_str("fuzz.py", source, &config) {
        // Anything that loads must survive a render/load round trip
        Ok(registry) => {
            let rendered = manifest::render(&registry, &config);
            let reloaded = load_manifest_str("rendered.py", &rendered, &config);
            assert_eq!(reloaded.ok(), Some(registry));
        }
        // Every label must point inside the input
        Err(err) => {
            for diagnostic in err.diagnostics() {
                for span in diagnostic.label_spans() {
                    assert!(span.start <= span.end && span.end <= source.len());
                }
            }
        }
    }
});
