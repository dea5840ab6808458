use super::*;

fn fails() -> Result<u32> {
    Err(Error::NoValid { context: "inverse" })
}

fn outer() -> Result<u32> {
    let v = fails().caught("outer")?;
    Ok(v + 1)
}

#[test]
fn test_kind_survives_reraise() {
    let err = outer().unwrap_err();
    assert!(err.is_caught());
    assert_eq!(err.kind(), ErrorKind::NoValid);
    assert_eq!(err.context(), "outer");
}

#[test]
fn test_display() {
    let err = Error::NoBuffer {
        context: "fp_read_bin",
        expected: 48,
        actual: 47,
    };
    assert_eq!(
        format!("{}", err),
        "fp_read_bin: invalid buffer length (expected 48, got 47)"
    );
    let caught = err.with_context("g1_read_bin");
    assert_eq!(format!("{}", caught), "g1_read_bin: caught ERR_NO_BUFFER");
}

#[test]
fn test_result_kind() {
    let ok: Result<u8> = Ok(1);
    assert_eq!(ok.kind(), None);
    assert_eq!(fails().kind(), Some(ErrorKind::NoValid));
    assert_eq!(Error::from(ErrorKind::NoCurve).kind(), ErrorKind::NoCurve);
}
