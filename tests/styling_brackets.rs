use std::io::Write;

use withal::fault::{Fault, FaultKind};
use withal::scope::enter;
use withal::style::{PrintRed, RED, RESET};

#[test]
fn body_output_is_bracketed_by_red_and_reset() {
    let mut buf = Vec::new();
    let mut red = PrintRed::to(&mut buf);
    let outcome = enter(&mut red, |c| {
        write!(c.writer(), "inside")?;
        Ok(())
    });
    assert!(outcome.expect("styled scope").is_some());
    let bytes = String::from_utf8(buf).expect("utf8");
    assert_eq!(bytes, format!("{RED}inside{RESET}"));
}

#[test]
fn faulting_body_is_still_reset_and_the_fault_reaches_the_caller() {
    let mut buf = Vec::new();
    let mut red = PrintRed::to(&mut buf);
    let outcome: Result<Option<()>, Fault> = enter(&mut red, |c| {
        write!(c.writer(), "partial")?;
        Err(Fault::new(FaultKind::Lookup, "missing key"))
    });
    let fault = outcome.expect_err("styling never suppresses");
    assert_eq!(fault.kind(), FaultKind::Lookup);
    let bytes = String::from_utf8(buf).expect("utf8");
    assert!(bytes.starts_with(RED), "red escape first: {bytes:?}");
    assert!(
        bytes.ends_with(RESET),
        "reset must follow a faulting body: {bytes:?}"
    );
}
