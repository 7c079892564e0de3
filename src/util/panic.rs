/// Asserts that running the block panics. With a second argument, the panic message must also
/// contain the given text.
macro_rules! assert_panics {
    ($run:block) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), "block didn't panic");
    };
    ($run:block, $expected:literal) => {
        match std::panic::catch_unwind(|| $run) {
            Ok(_) => panic!("block didn't panic, expected {:?}", $expected),
            Err(payload) => {
                let message = payload.downcast_ref::<String>().map(String::as_str)
                    .or_else(|| payload.downcast_ref::<&str>().copied())
                    .unwrap_or_default();
                assert!(
                    message.contains($expected),
                    "panic message {message:?} doesn't contain {:?}", $expected,
                );
            },
        }
    };
}

pub(crate) use assert_panics;
