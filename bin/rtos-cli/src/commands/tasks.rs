// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `rtos-cli get-tasks` command: fetch, normalize and print the task table.

use anyhow::Context;
use proto_rpc::{ClientConfig, RpcClient, SnapshotFile, TaskSource};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

/// Options of the `get-tasks` subcommand.
#[derive(Debug, Default)]
pub struct TaskOptions {
    pub json: bool,
    pub watch: Option<Duration>,
    pub replay: Option<PathBuf>,
}

pub async fn execute(config: ClientConfig, options: TaskOptions) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Some(path) = &options.replay {
        let mut source = SnapshotFile::new(path);
        info!(path = %source.path().display(), "replaying recorded snapshot");
        return run(&mut source, &options, &mut out).await;
    }

    let mut client = RpcClient::connect(&config)
        .await
        .with_context(|| format!("cannot reach device at {}", config.addr()))?;
    info!(addr = %client.addr(), "querying device tasks");

    let result = run(&mut client, &options, &mut out).await;

    if let Err(e) = client.close().await {
        warn!("error while closing connection: {e}");
    }
    result
}

/// Runs one report, or a report every `options.watch` until Ctrl-C.
pub async fn run<S, W>(source: &mut S, options: &TaskOptions, out: &mut W) -> anyhow::Result<()>
where
    S: TaskSource,
    W: Write,
{
    let Some(period) = options.watch else {
        let text = report_once(source, options.json).await?;
        out.write_all(text.as_bytes())?;
        out.flush()?;
        return Ok(());
    };

    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut cycle: u64 = 0;
    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = ticker.tick() => {}
        }

        // Ctrl-C drops the in-flight fetch.
        let text = tokio::select! {
            _ = &mut shutdown => break,
            text = report_once(source, options.json) => text?,
        };

        if cycle > 0 {
            writeln!(out)?;
        }
        out.write_all(text.as_bytes())?;
        out.flush()?;
        cycle += 1;
    }

    info!(cycles = cycle, "watch stopped");
    Ok(())
}

/// Fetches one snapshot and renders it completely before anything is printed.
pub async fn report_once<S: TaskSource>(source: &mut S, json: bool) -> anyhow::Result<String> {
    let snapshot = source
        .fetch_task_snapshot()
        .await
        .context("failed to fetch task snapshot")?;

    let report = task_report::normalize(&snapshot);
    info!("{}", report.summary());

    if json {
        Ok(task_report::render_json(&report)?)
    } else {
        Ok(task_report::render_table(&report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proto_rpc::TransportError;
    use std::collections::VecDeque;
    use task_model::{CorePin, TaskRecord, TaskSnapshot, TaskState};

    struct FakeSource {
        replies: VecDeque<Result<TaskSnapshot, TransportError>>,
        calls: usize,
    }

    impl FakeSource {
        fn new(replies: Vec<Result<TaskSnapshot, TransportError>>) -> Self {
            Self {
                replies: replies.into(),
                calls: 0,
            }
        }
    }

    impl TaskSource for FakeSource {
        async fn fetch_task_snapshot(&mut self) -> Result<TaskSnapshot, TransportError> {
            self.calls += 1;
            self.replies.pop_front().unwrap_or(Err(TransportError::Closed))
        }
    }

    fn snapshot() -> TaskSnapshot {
        TaskSnapshot {
            task_info: vec![
                TaskRecord {
                    number: 2,
                    name: "idle".into(),
                    state: TaskState::Ready,
                    core: CorePin::Unpinned,
                    prio: 0,
                    rtc: 900,
                    stack_remaining: 128,
                },
                TaskRecord {
                    number: 1,
                    name: "main".into(),
                    state: TaskState::Running,
                    core: CorePin::Core(0),
                    prio: 5,
                    rtc: 100,
                    stack_remaining: 256,
                },
            ],
            run_time: 1000,
        }
    }

    #[tokio::test]
    async fn test_report_once_table() {
        let mut source = FakeSource::new(vec![Ok(snapshot())]);
        let text = report_once(&mut source, false).await.unwrap();

        assert!(text.starts_with("RTOS Tasks"));
        assert!(text.contains("main"));
        assert!(text.contains("NO PIN"));
        assert!(text.contains("90.0"));
        assert!(text.ends_with("total run time: 1000\n"));
    }

    #[tokio::test]
    async fn test_report_once_json() {
        let mut source = FakeSource::new(vec![Ok(snapshot())]);
        let text = report_once(&mut source, true).await.unwrap();

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["run_time"], 1000);
        assert_eq!(value["rows"][0]["name"], "main");
        assert_eq!(value["rows"][1]["core_label"], "NO PIN");
    }

    #[tokio::test]
    async fn test_transport_error_prints_nothing() {
        let mut source = FakeSource::new(vec![Err(TransportError::Timeout {
            operation: "rpc call",
            timeout_ms: 2000,
        })]);
        let mut out = Vec::new();

        let err = run(&mut source, &TaskOptions::default(), &mut out)
            .await
            .unwrap_err();

        assert!(out.is_empty());
        let chain = format!("{err:#}");
        assert!(chain.contains("failed to fetch task snapshot"));
        assert!(chain.contains("timed out"));
    }

    #[tokio::test]
    async fn test_watch_json_documents_are_separated() {
        let mut source = FakeSource::new(vec![Ok(snapshot()), Ok(snapshot())]);
        let options = TaskOptions {
            json: true,
            watch: Some(Duration::from_millis(10)),
            ..Default::default()
        };
        let mut out = Vec::new();

        run(&mut source, &options, &mut out).await.unwrap_err();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("}\n"));
        let documents: Vec<&str> = text.split("}\n\n{").collect();
        assert_eq!(documents.len(), 2);
    }

    #[tokio::test]
    async fn test_watch_aborts_on_failure() {
        let mut source = FakeSource::new(vec![Ok(snapshot()), Ok(snapshot())]);
        let options = TaskOptions {
            watch: Some(Duration::from_millis(10)),
            ..Default::default()
        };
        let mut out = Vec::new();

        // Third fetch hits the closed connection.
        let err = run(&mut source, &options, &mut out).await.unwrap_err();
        assert!(format!("{err:#}").contains("connection closed"));
        assert_eq!(source.calls, 3);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("RTOS Tasks").count(), 2);
        assert_eq!(text.matches("total run time: 1000").count(), 2);
    }
}
