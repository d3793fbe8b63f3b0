//! Async driver: feeds input lines to a [`Shell`], advances its clock from a tokio
//! interval and mirrors new scrollback lines to a writer.

use crate::host::Host;
use crate::shell::{Key, KeyEvent, Shell};
use std::io;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::{self, Instant, MissedTickBehavior};

/// Clock resolution of the loop.
pub const TICK: Duration = Duration::from_millis(10);

const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Tracks what has already been written so only new lines go out.
struct Mirror {
    generation: u64,
    written: usize,
}

impl Mirror {
    async fn flush<H: Host, W: AsyncWrite + Unpin>(
        &mut self,
        shell: &Shell<H>,
        writer: &mut W,
    ) -> io::Result<()> {
        let output = shell.output();
        if output.generation() != self.generation {
            self.generation = output.generation();
            self.written = 0;
            writer.write_all(CLEAR_SCREEN.as_bytes()).await?;
        }
        for line in &output.lines()[self.written.min(output.lines().len())..] {
            writer.write_all(line.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }
        self.written = output.lines().len();
        writer.flush().await
    }
}

/// One console line. A trailing TAB asks for completion of the text before it; an empty
/// line submits whatever completion left in the buffer.
fn feed<H: Host>(shell: &mut Shell<H>, line: &str) -> Option<String> {
    if let Some(partial) = line.strip_suffix('\t') {
        shell.set_input(partial);
        shell.handle_key(KeyEvent::plain(Key::Tab));
        return Some(format!("{} {}", shell.prompt(), shell.input()));
    }
    let submitted = if line.trim().is_empty() && !shell.input().is_empty() {
        shell.input().to_string()
    } else {
        line.to_string()
    };
    shell.submit(&submitted);
    None
}

/// Runs until `reader` is exhausted and no one-shot work (prank, focus, reopen) is left.
pub async fn run<H, R, W>(shell: &mut Shell<H>, reader: R, mut writer: W) -> io::Result<()>
where
    H: Host,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut ticker = time::interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last = Instant::now();
    let mut mirror = Mirror {
        generation: shell.output().generation(),
        written: 0,
    };
    let mut reading = true;
    mirror.flush(shell, &mut writer).await?;

    loop {
        tokio::select! {
            line = lines.next_line(), if reading => {
                let now = Instant::now();
                shell.advance(now - last);
                last = now;
                match line? {
                    Some(line) => {
                        if let Some(pending) = feed(shell, &line) {
                            writer.write_all(pending.as_bytes()).await?;
                            writer.write_all(b"\n").await?;
                        }
                    }
                    None => {
                        tracing::debug!("input closed");
                        reading = false;
                    }
                }
            }
            _ = ticker.tick() => {
                let now = Instant::now();
                shell.advance(now - last);
                last = now;
            }
        }
        mirror.flush(shell, &mut writer).await?;
        if !reading && !shell.has_pending_work() {
            break;
        }
    }
    tracing::debug!(elapsed = ?shell.now(), "runtime finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ShellSettings;
    use crate::testing::RecordingHost;
    use crate::vfs::{Project, SiteContent};

    fn shell() -> Shell<RecordingHost> {
        let content = SiteContent {
            projects: vec![Project::new("Pong")],
            ..SiteContent::default()
        };
        Shell::new(ShellSettings::default(), content, RecordingHost::new())
    }

    #[test]
    fn tab_line_completes_and_empty_line_submits() {
        let mut sh = shell();
        assert_eq!(
            feed(&mut sh, "cd pro\t"),
            Some("guest@localhost ~ % cd projects ".to_string())
        );
        assert_eq!(feed(&mut sh, ""), None);
        assert_eq!(sh.cwd(), "/home/projects");
        assert_eq!(sh.input(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn mirrors_output_lines() {
        let mut sh = shell();
        let mut out = Vec::new();
        run(&mut sh, &b"pwd\nls\n"[..], &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Type 'help' to get started.\n\
             guest@localhost ~ % pwd\n~\n\
             guest@localhost ~ % ls\nabout  contact  projects\n"
        );
    }
}
