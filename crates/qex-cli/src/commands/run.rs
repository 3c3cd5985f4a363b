//! `qex run` command implementation
//!
//! Supervised execution: relaunch a bounded-lifetime worker process
//! after every checkpoint until the dataset is complete.

use crate::error::Result;
use crate::supervisor;
use crate::PipelineArgs;
use std::time::Duration;

/// Run the pipeline under the restart supervisor
pub async fn run(pipeline: &PipelineArgs, cooldown_secs: u64) -> Result<()> {
    let args = worker_args(pipeline);
    supervisor::supervise(&args, Duration::from_secs(cooldown_secs)).await
}

/// The `qex worker` argument vector equivalent to `pipeline`.
///
/// Every relaunch uses this identical invocation; all run state lives in
/// the checkpoint and ledger files, never in the supervisor.
fn worker_args(pipeline: &PipelineArgs) -> Vec<String> {
    let mut args = vec![
        "worker".to_string(),
        "--dataset".to_string(),
        pipeline.dataset.display().to_string(),
        "--images-dir".to_string(),
        pipeline.images_dir.display().to_string(),
        "--output".to_string(),
        pipeline.output.display().to_string(),
        "--checkpoint".to_string(),
        pipeline.checkpoint.display().to_string(),
        "--batch-size".to_string(),
        pipeline.batch_size.to_string(),
        "--recognizer-url".to_string(),
        pipeline.recognizer_url.clone(),
        "--tagger-url".to_string(),
        pipeline.tagger_url.clone(),
    ];

    if let Some(secs) = pipeline.request_timeout_secs {
        args.push("--request-timeout-secs".to_string());
        args.push(secs.to_string());
    }

    args
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn pipeline_args() -> PipelineArgs {
        PipelineArgs {
            dataset: PathBuf::from("./test.csv"),
            images_dir: PathBuf::from("./images_enhanced"),
            output: PathBuf::from("./predictions.csv"),
            checkpoint: PathBuf::from("./checkpoint.txt"),
            batch_size: 500,
            recognizer_url: "http://localhost:9001".to_string(),
            tagger_url: "http://localhost:9002".to_string(),
            request_timeout_secs: None,
        }
    }

    #[test]
    fn test_worker_args_round_trip() {
        let args = worker_args(&pipeline_args());
        assert_eq!(args[0], "worker");
        assert!(args.contains(&"--batch-size".to_string()));
        assert!(args.contains(&"500".to_string()));
        assert!(!args.contains(&"--request-timeout-secs".to_string()));
    }

    #[test]
    fn test_worker_args_include_optional_timeout() {
        let mut pipeline = pipeline_args();
        pipeline.request_timeout_secs = Some(120);

        let args = worker_args(&pipeline);
        assert!(args.contains(&"--request-timeout-secs".to_string()));
        assert!(args.contains(&"120".to_string()));
    }
}
