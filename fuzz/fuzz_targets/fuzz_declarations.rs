#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

use metafacet::infrastructure::{parse_declarations, DeclarationFormat};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Both syntaxes must reject garbage without panicking
        let _ = parse_declarations(content, DeclarationFormat::Toml, Path::new("fuzz.toml"));
        let _ = parse_declarations(content, DeclarationFormat::Yaml, Path::new("fuzz.yaml"));
    }
});
