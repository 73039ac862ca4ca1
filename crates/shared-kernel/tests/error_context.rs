// crates/shared-kernel/tests/error_context.rs
use std::io;

use countable_shared_kernel::{CountableError, ErrorContext, InfrastructureError};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(CountableError::from)
        .context("resolving selector roots")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("resolving selector roots"));
    assert!(display.contains("Output error:"));
}

#[test]
fn infrastructure_variants_name_their_subject() {
    let read = InfrastructureError::SurfaceRead {
        path: "notes.txt".into(),
        source: io::Error::other("denied"),
    };
    assert!(read.to_string().contains("notes.txt"));

    let watch = InfrastructureError::Watch {
        details: "channel closed".into(),
    };
    assert!(watch.to_string().contains("channel closed"));

    let output = CountableError::from(io::Error::other("broken pipe"));
    assert!(output.to_string().contains("broken pipe"));
}

#[test]
fn with_context_is_lazy() {
    let ok: Result<u8, io::Error> = Ok(7);
    let value = ok
        .map_err(CountableError::from)
        .with_context(|| unreachable!("not evaluated on the Ok path"))
        .unwrap();
    assert_eq!(value, 7);
}
