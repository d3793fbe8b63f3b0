use folio_shell::prank::FAREWELL;
use folio_shell::runtime;
use folio_shell::shell::{Shell, ShellSettings};
use folio_shell::testing::RecordingHost;
use folio_shell::vfs::SiteContent;
use std::time::Duration;

fn shell() -> Shell<RecordingHost> {
    Shell::new(
        ShellSettings::default(),
        SiteContent::default(),
        RecordingHost::new(),
    )
}

#[tokio::test(start_paused = true)]
async fn test_prank_plays_out_after_input_ends() {
    let mut sh = shell();
    let before = sh.host().page.layout();
    let mut out = Vec::new();
    let started = tokio::time::Instant::now();

    runtime::run(&mut sh, &b"rm -rf / --no-preserve-root\n"[..], &mut out)
        .await
        .unwrap();

    assert!(started.elapsed() >= Duration::from_millis(11_600));
    assert_eq!(sh.lines(), [FAREWELL]);
    assert_eq!(sh.host().page.layout(), before);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("rm: removing '/bin/bash'"));
    assert!(text.ends_with(&format!("{}\n", FAREWELL)));
}

#[tokio::test(start_paused = true)]
async fn test_returns_promptly_without_pending_work() {
    let mut sh = shell();
    let mut out = Vec::new();
    runtime::run(&mut sh, &b"help\n"[..], &mut out).await.unwrap();
    assert!(sh.now() < Duration::from_secs(1));
    assert!(String::from_utf8(out).unwrap().contains("Commands: help"));
}
