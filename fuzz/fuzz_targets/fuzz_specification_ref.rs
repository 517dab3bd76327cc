#![no_main]

use libfuzzer_sys::fuzz_target;

use metafacet::domain::ports::SpecificationProvider;
use metafacet::infrastructure::SpecificationRegistry;

fuzz_target!(|data: &[u8]| {
    if let Ok(reference) = std::str::from_utf8(data) {
        // Built-in constructors see arbitrary arguments here
        let _ = SpecificationRegistry::with_builtins().instantiate_str(reference);
    }
});
