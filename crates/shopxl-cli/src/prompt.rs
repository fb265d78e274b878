//! Interactive trigger: one storefront URL per input line.
//!
//! The trigger is disarmed while a run is in flight and stays disarmed for a
//! fixed cool-down after it finishes, whatever the outcome. Lines typed in
//! the meantime are read and dropped rather than queued; `quit` still ends
//! the prompt. With a zero cool-down the trigger re-arms at once and
//! buffered lines run in order.

use std::path::PathBuf;
use std::time::Duration;

use shopxl_core::{RunOutcome, RunStatus};
use shopxl_scraper::CatalogClient;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};

use crate::export::run_export;

pub(crate) struct Trigger<'a> {
    client: &'a CatalogClient,
    output_dir: PathBuf,
    cooldown: Duration,
    status: RunStatus,
}

impl<'a> Trigger<'a> {
    pub(crate) fn new(client: &'a CatalogClient, output_dir: PathBuf, cooldown: Duration) -> Self {
        Self {
            client,
            output_dir,
            cooldown,
            status: RunStatus::Idle,
        }
    }

    /// Starts a run if the trigger is armed. Returns `None` when it is not.
    pub(crate) async fn fire(&mut self, shop_url: &str) -> Option<RunOutcome> {
        if !self.status.accepts_trigger() {
            tracing::warn!(shop_url, status = ?self.status, "trigger is not armed; ignoring");
            return None;
        }

        self.set_status(RunStatus::Running);
        let outcome = run_export(self.client, shop_url, &self.output_dir).await;
        self.set_status(RunStatus::Done(outcome.clone()));
        Some(outcome)
    }

    /// Waits out the cool-down, then clears the status and re-arms.
    ///
    /// Lines arriving before the cool-down elapses go to [`Trigger::fire`]
    /// while it is still disarmed, so they are logged and dropped. Returns
    /// `false` if `quit` or end of input arrives first.
    pub(crate) async fn cool_down<R>(
        &mut self,
        lines: &mut Lines<BufReader<R>>,
    ) -> std::io::Result<bool>
    where
        R: AsyncRead + Unpin,
    {
        if !self.cooldown.is_zero() {
            let sleep = tokio::time::sleep(self.cooldown);
            tokio::pin!(sleep);
            loop {
                tokio::select! {
                    biased;
                    () = &mut sleep => break,
                    line = lines.next_line() => {
                        let Some(line) = line? else {
                            return Ok(false);
                        };
                        match parse_line(&line) {
                            Input::Blank => {}
                            Input::Quit => return Ok(false),
                            Input::Url(shop_url) => {
                                let _ = self.fire(shop_url).await;
                            }
                        }
                    }
                }
            }
        }
        self.status = RunStatus::Idle;
        Ok(true)
    }

    fn set_status(&mut self, status: RunStatus) {
        self.status = status;
        let line = self.status.to_string();
        if !line.is_empty() {
            println!("{line}");
        }
    }
}

enum Input<'l> {
    Blank,
    Quit,
    Url(&'l str),
}

fn parse_line(line: &str) -> Input<'_> {
    match line.trim() {
        "" => Input::Blank,
        "quit" | "exit" => Input::Quit,
        shop_url => Input::Url(shop_url),
    }
}

/// Feeds each non-blank line of `input` to `trigger` until EOF or `quit`.
///
/// # Errors
///
/// Returns an error only if reading `input` fails.
pub(crate) async fn run_prompt<R>(
    trigger: &mut Trigger<'_>,
    input: R,
) -> anyhow::Result<Vec<RunOutcome>>
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(input).lines();
    let mut outcomes = Vec::new();

    while let Some(line) = lines.next_line().await? {
        let shop_url = match parse_line(&line) {
            Input::Blank => continue,
            Input::Quit => break,
            Input::Url(shop_url) => shop_url,
        };

        if let Some(outcome) = trigger.fire(shop_url).await {
            outcomes.push(outcome);
        }
        if !trigger.cool_down(&mut lines).await? {
            break;
        }
    }

    Ok(outcomes)
}
