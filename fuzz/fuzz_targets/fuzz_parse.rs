// fuzz/fuzz_targets/fuzz_parse.rs
#![no_main]

use libfuzzer_sys::fuzz_target;
use ms_duration::{convert, parse, Options, Output};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let direct = parse(input);

    // Oversized input never yields a value.
    if input.chars().count() > ms_duration::parse::MAX_INPUT_LEN {
        assert_eq!(direct, None);
    }

    // The dispatcher agrees with the parser for every non-empty string.
    match convert(input, &Options::default()) {
        Ok(Output::Millis(ms)) => assert_eq!(ms.map(f64::to_bits), direct.map(f64::to_bits)),
        Ok(Output::Text(_)) => panic!("text input produced formatted output"),
        Err(_) => assert!(input.is_empty()),
    }
});
