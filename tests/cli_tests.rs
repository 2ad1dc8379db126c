mod common;

use common::{run_summariser, TestEnv};

#[test]
fn summariser_help_shows_usage() {
    let output = run_summariser(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--help should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("summariser transcript.txt -o summary.txt"));
}

#[test]
fn summariser_version_shows_version() {
    let output = run_summariser(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("summariser "));
}

#[test]
fn missing_input_argument_is_a_usage_error() {
    let output = run_summariser(&[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
}

#[test]
fn completions_bash_outputs_script() {
    let output = run_summariser(&["--completions", "bash"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "completions should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(
        stdout.contains("summariser"),
        "expected completion output to reference command name\nstdout:\n{}",
        stdout
    );
}

#[test]
fn missing_file_is_reported_on_stdout() {
    let env = TestEnv::new();
    let output = env.run(&["absent.txt"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!output.status.success(), "stdout:\n{}", stdout);
    assert!(
        stdout.contains("Error: Input file not found: absent.txt"),
        "stdout:\n{}",
        stdout
    );
    assert!(env.work_files().is_empty());
}

#[test]
fn wrong_extension_is_rejected() {
    let env = TestEnv::new();
    env.write_transcript("call.md", "Alice: hello\n");

    let output = env.run(&["call.md"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!output.status.success());
    assert!(
        stdout.contains("Error: Input file must be a .txt file"),
        "stdout:\n{}",
        stdout
    );
    assert_eq!(env.work_files(), vec!["call.md".to_string()]);
}

#[test]
fn blank_transcript_is_rejected_before_contacting_bedrock() {
    let env = TestEnv::new();
    env.write_transcript("blank.txt", " \n\t\n");

    let output = env.run(&["blank.txt"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!output.status.success());
    assert!(
        stdout.contains("Error: No text content found in the document"),
        "stdout:\n{}",
        stdout
    );
    assert!(!stdout.contains("Sending content to AWS Bedrock"));
    assert_eq!(env.work_files(), vec!["blank.txt".to_string()]);
}

#[test]
fn missing_credentials_fail_without_writing_output() {
    let env = TestEnv::new();
    env.write_transcript("standup.txt", "Alice: ship it on Friday.\n");

    let output = env.run(&["standup.txt", "-o", "summary.txt"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!output.status.success(), "stdout:\n{}", stdout);
    assert!(
        stdout.contains("AWS credentials not found"),
        "stdout:\n{}",
        stdout
    );
    assert!(stdout.contains("Extracted 26 characters of text"));
    assert_eq!(env.work_files(), vec!["standup.txt".to_string()]);
}

#[cfg(target_os = "linux")]
#[test]
fn malformed_config_file_is_reported() {
    let env = TestEnv::new();
    env.write_transcript("standup.txt", "Alice: hello\n");
    env.write_config("[bedrock\nregion = ");

    let output = env.run(&["standup.txt"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!output.status.success());
    assert!(
        stdout.contains("Failed to parse config file"),
        "stdout:\n{}",
        stdout
    );
    assert_eq!(env.work_files(), vec!["standup.txt".to_string()]);
}
