//! Integration tests for `cxl help`

use cxl::cli::usage_text;
use tempfile::TempDir;

use crate::integration::{cxl_command, run_cxl};

#[test]
fn test_help_without_topic_matches_no_command_usage() {
    let temp = TempDir::new().unwrap();

    let bare = run_cxl(cxl_command(&temp));

    for args in [vec!["help"], vec!["--help"], vec!["-h"]] {
        let mut command = cxl_command(&temp);
        command.args(&args);
        let output = run_cxl(command);

        assert_eq!(output.status, 0, "args {:?}", args);
        assert_eq!(output.stdout, usage_text(), "args {:?}", args);
        assert_eq!(output.stdout.as_bytes(), bare.stdout.as_bytes());
    }
}

#[test]
fn test_help_list_cmds_prints_topics() {
    let temp = TempDir::new().unwrap();
    let mut command = cxl_command(&temp);
    command.args(["help", "--list-cmds"]);
    let output = run_cxl(command);

    assert_eq!(output.status, 0);
    assert_eq!(output.stdout, "list\n");
}

#[test]
fn test_help_rejects_unknown_option() {
    let temp = TempDir::new().unwrap();
    let mut command = cxl_command(&temp);
    command.args(["help", "--bogus"]);
    let output = run_cxl(command);

    assert_ne!(output.status, 0);
    assert!(output.stderr.contains("--bogus"));
}

#[test]
fn test_help_topic_without_viewer_is_reported() {
    let temp = TempDir::new().unwrap();
    let mut command = cxl_command(&temp);
    command
        .env("CXL_MAN_VIEWER", temp.path().join("missing-viewer"))
        .env("CXL__HELP__MAN_VIEWER", temp.path().join("missing-man"))
        .args(["help", "list"]);
    let output = run_cxl(command);

    assert_eq!(output.status, 1);
    assert!(
        output.stderr.contains("No man viewer handled the request for 'cxl-list'"),
        "stderr: {}",
        output.stderr
    );
}

#[cfg(unix)]
mod viewer {
    use super::*;
    use crate::integration::write_viewer_script;

    #[test]
    fn test_help_topic_runs_env_viewer() {
        let temp = TempDir::new().unwrap();
        let record = temp.path().join("requested-page");
        let script = write_viewer_script(temp.path(), &record, 0);

        let mut command = cxl_command(&temp);
        command
            .env("CXL_MAN_VIEWER", &script)
            .args(["help", "list"]);
        let output = run_cxl(command);

        assert_eq!(output.status, 0, "stderr: {}", output.stderr);
        assert_eq!(std::fs::read_to_string(&record).unwrap(), "cxl-list");
    }

    #[test]
    fn test_help_ignores_arguments_after_topic() {
        let temp = TempDir::new().unwrap();
        let record = temp.path().join("requested-page");
        let script = write_viewer_script(temp.path(), &record, 0);

        let mut command = cxl_command(&temp);
        command
            .env("CXL_MAN_VIEWER", &script)
            .args(["help", "list", "extra"]);
        let output = run_cxl(command);

        assert_eq!(output.status, 0, "stderr: {}", output.stderr);
        assert_eq!(std::fs::read_to_string(&record).unwrap(), "cxl-list");
    }

    #[test]
    fn test_help_topic_in_tool_namespace_used_as_given() {
        let temp = TempDir::new().unwrap();
        let record = temp.path().join("requested-page");
        let script = write_viewer_script(temp.path(), &record, 0);

        let mut command = cxl_command(&temp);
        command.env("CXL_MAN_VIEWER", &script).args(["help", "cxl"]);
        let output = run_cxl(command);

        assert_eq!(output.status, 0, "stderr: {}", output.stderr);
        assert_eq!(std::fs::read_to_string(&record).unwrap(), "cxl");
    }

    #[test]
    fn test_help_topic_falls_back_to_configured_viewer() {
        let temp = TempDir::new().unwrap();
        let record = temp.path().join("requested-page");
        let script = write_viewer_script(temp.path(), &record, 0);

        let mut command = cxl_command(&temp);
        command
            .env("CXL_MAN_VIEWER", temp.path().join("missing-viewer"))
            .env("CXL__HELP__MAN_VIEWER", &script)
            .args(["--help", "create-region"]);
        let output = run_cxl(command);

        assert_eq!(output.status, 0, "stderr: {}", output.stderr);
        assert_eq!(
            std::fs::read_to_string(&record).unwrap(),
            "cxl-create-region"
        );
    }

    #[test]
    fn test_help_topic_passes_viewer_failure_through() {
        let temp = TempDir::new().unwrap();
        let record = temp.path().join("requested-page");
        let script = write_viewer_script(temp.path(), &record, 16);

        let mut command = cxl_command(&temp);
        command
            .env("CXL_MAN_VIEWER", &script)
            .args(["help", "list"]);
        let output = run_cxl(command);

        assert_eq!(output.status, 16);
        assert!(
            output.stderr.contains("No manual entry shown for 'cxl-list'"),
            "stderr: {}",
            output.stderr
        );
    }
}
