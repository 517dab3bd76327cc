#![no_main]

use libfuzzer_sys::fuzz_target;

use metafacet::domain::value_objects::Value;

fuzz_target!(|data: &[u8]| {
    if let Ok(literal) = std::str::from_utf8(data) {
        let value = Value::parse_literal(literal);
        let _ = value.to_string();
    }
});
