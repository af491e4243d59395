use withal::fault::{Fault, FaultKind};
use withal::scope::enter;
use withal::suppress::{IgnoreZeroDiv, div};

#[test]
fn division_by_zero_is_suppressed_and_reported_with_the_faulting_line() {
    let mut buf = Vec::new();
    let mut quiet = IgnoreZeroDiv::to(&mut buf);
    let faulting_line = line!() + 1;
    let outcome = enter(&mut quiet, |_| div(7, 0));
    assert!(outcome.expect("suppressed").is_none());
    let report = String::from_utf8(buf).expect("utf8");
    assert_eq!(
        report,
        format!("We pretend you didn't divide by zero in line {faulting_line}\n")
    );
}

#[test]
fn other_fault_kinds_propagate_unchanged() {
    let mut quiet = IgnoreZeroDiv::to(Vec::new());
    let outcome: Result<Option<()>, Fault> =
        enter(&mut quiet, |_| Err(Fault::new(FaultKind::Lookup, "no such key")));
    let fault = outcome.expect_err("lookup faults are not ours");
    assert_eq!(fault.kind(), FaultKind::Lookup);
    assert_eq!(fault.detail(), "no such key");
}

#[test]
fn an_uneventful_scope_exits_normally() {
    let mut quiet = IgnoreZeroDiv::to(Vec::new());
    let outcome = enter(&mut quiet, |_| Ok(42));
    assert_eq!(outcome.expect("no fault to handle"), Some(42));
}

#[test]
fn div_returns_the_quotient_for_a_nonzero_divisor() {
    assert_eq!(div(84, 2).expect("plain division"), 42);
}

#[test]
fn div_records_the_call_site_in_the_fault() {
    let fault = div(1, 0).expect_err("zero divisor");
    assert_eq!(fault.kind(), FaultKind::DivisionByZero);
    assert_eq!(fault.line(), line!() - 2);
    assert!(fault.file().ends_with("zero_div_suppression.rs"));
    assert_eq!(fault.detail(), "1 / 0");
}
