// fuzz/fuzz_targets/fuzz_format.rs
#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use ms_duration::{convert, parse, Options, Output};

#[derive(Arbitrary, Debug)]
struct FormatCase {
    ms: f64,
    long: bool,
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(case) = FormatCase::arbitrary(&mut u) else {
        return;
    };
    let options = Options { long: case.long };

    match convert(case.ms, &options) {
        Ok(Output::Text(out)) => {
            assert!(case.ms.is_finite());
            // Rounded output that fits the length limit reparses to a value.
            if case.ms.abs() >= 1_000.0 && out.chars().count() <= ms_duration::parse::MAX_INPUT_LEN {
                assert!(parse(&out).is_some(), "{} -> {out:?} did not reparse", case.ms);
            }
        }
        Ok(Output::Millis(_)) => panic!("number input produced parsed output"),
        Err(_) => assert!(!case.ms.is_finite()),
    }
});
