//! Integration tests for the abort behavior of the mailnotify binary.

use std::io::Write;
use std::process::Command;

/// Command for the compiled binary with a clean environment, so ambient
/// variables (HOSTNAME in particular) cannot satisfy mandatory fields.
fn mailnotify() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mailnotify"));
    cmd.env_clear();
    cmd
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn missing_everything_aborts_naming_the_first_mandatory_field() {
    let output = mailnotify().output().expect("Failed to run mailnotify");

    assert!(!output.status.success(), "run must abort");
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr_of(&output).contains("Require option date"),
        "stderr should name the missing field: {}",
        stderr_of(&output)
    );
}

#[test]
fn missing_single_field_aborts_naming_that_field() {
    let mut template = tempfile::NamedTempFile::new().unwrap();
    write!(template, "Alert on {{{{ hostname }}}}").unwrap();

    // Everything except -r/--usermail.
    let output = mailnotify()
        .args(["-d", "2018-09-27 10:00:00 +0200"])
        .args(["-e", "disk"])
        .args(["-l", "web01"])
        .args(["-n", "web01.example.org"])
        .args(["-o", "DISK CRITICAL"])
        .args(["-s", "CRITICAL"])
        .args(["-t", "PROBLEM"])
        .args(["-u", "Disk Space"])
        .arg("-T")
        .arg(template.path())
        .output()
        .expect("Failed to run mailnotify");

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr_of(&output).contains("Require option usermail"),
        "stderr should name usermail: {}",
        stderr_of(&output)
    );
}

#[test]
fn environment_variable_satisfies_a_mandatory_field() {
    // USEREMAIL from the environment, -e still missing: validation moves
    // past usermail and reports the flag-only field instead.
    let output = mailnotify()
        .env("LONGDATETIME", "2018-09-27 10:00:00 +0200")
        .env("USEREMAIL", "ops@example.org")
        .output()
        .expect("Failed to run mailnotify");

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr_of(&output).contains("Require option servicename"),
        "stderr should name servicename, not date or usermail: {}",
        stderr_of(&output)
    );
}

#[test]
fn missing_template_file_is_reported_before_other_validation() {
    // Only -T is given, pointing nowhere; every other mandatory field is
    // also missing, but the template path must be the reported error.
    let output = mailnotify()
        .args(["-T", "/nonexistent/mail.tpl"])
        .output()
        .expect("Failed to run mailnotify");

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("Templatefile /nonexistent/mail.tpl does not exist"),
        "stderr should cite the template path: {}",
        stderr
    );
    assert!(
        !stderr.contains("Require option"),
        "template check must come before mandatory-field validation: {}",
        stderr
    );
}

#[test]
fn unreadable_template_with_log_flag_still_aborts() {
    let output = mailnotify()
        .args(["-v", "-T", "/nonexistent/mail.tpl"])
        .output()
        .expect("Failed to run mailnotify");

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr_of(&output).contains("does not exist"),
        "the abort message is printed even when -v diverts the log: {}",
        stderr_of(&output)
    );
}

/// Full success path against a live relay.
///
/// # Running locally
///
/// ```bash
/// # Needs an SMTP relay listening on localhost:25, e.g.:
/// docker run -d -p 25:1025 mailhog/mailhog
///
/// cargo test --test integration_cli -- --ignored
/// ```
#[test]
#[ignore] // Requires an SMTP relay on localhost:25
fn sends_mail_end_to_end() {
    let mut template = tempfile::NamedTempFile::new().unwrap();
    write!(template, "Alert on {{{{ hostname }}}}").unwrap();

    let output = mailnotify()
        .args(["-d", "2018-09-27 10:00:00 +0200"])
        .args(["-e", "disk"])
        .args(["-l", "web01"])
        .args(["-n", "web01.example.org"])
        .args(["-o", "DISK CRITICAL"])
        .args(["-r", "ops@example.org"])
        .args(["-s", "CRITICAL"])
        .args(["-t", "PROBLEM"])
        .args(["-u", "Disk Space"])
        .args(["-f", "icinga@example.org"])
        .arg("-T")
        .arg(template.path())
        .output()
        .expect("Failed to run mailnotify");

    assert!(
        output.status.success(),
        "send should succeed against the relay\nstderr: {}",
        stderr_of(&output)
    );
}
