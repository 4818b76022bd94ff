#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    bounded_view_fuzzing::oracles::view_slicing(data);
});
