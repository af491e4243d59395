use tempfile::tempdir;
use withal::driver;
use withal::settings::Settings;
use withal::style::{RED, RESET};

// End-to-end: a fresh store file, the full transcript, in order.
#[test]
fn fresh_run_produces_the_full_transcript_in_order() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("demo.sqlite");
    let mut settings = Settings::default();
    settings.store.path = path.to_str().expect("utf8 path").to_string();

    let mut out = Vec::new();
    driver::run(&settings, &mut out).expect("driver completes");
    let transcript = String::from_utf8(out).expect("utf8");

    let expected_prefix = format!(
        "PrintRed\n\
         --------\n\
         Before context\n\
         {RED}Within context...\n\
         ...more in context\n\
         {RESET}After context\n\
         \n\
         OpenDB\n\
         ------\n\
         Something to add\n\
         will be added to the DB\n\
         \n\
         IgnoreZeroDiv\n\
         -------------\n\
         We pretend you didn't divide by zero in line "
    );
    assert!(
        transcript.starts_with(&expected_prefix),
        "transcript was: {transcript:?}"
    );
    assert!(
        !transcript.contains("We won't arrive here"),
        "the suppressed body kept running"
    );
    assert!(path.exists(), "the run created the store file");

    // The report ends the transcript with a real line number.
    let tail = &transcript[expected_prefix.len()..];
    let line: u32 = tail.trim_end().parse().expect("line number");
    assert!(line > 0);
}
