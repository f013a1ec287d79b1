use std::env;

use anyhow::Context;
use sv_baseline::{
    WriteOutcome, check_web_workspace, collect_baseline_snapshots, ensure_env_local,
    ensure_visual_specs, find_free_port, run_streamed, standalone_server_path,
    write_runner_config,
};
use sv_config::SvConfig;

use crate::cli::root_commands::BaselineArgs;

/// Handle `svo baseline`. One-shot; not a stable interface.
pub async fn handle(args: &BaselineArgs, config: &SvConfig) -> anyhow::Result<()> {
    let root = match &args.root {
        Some(path) => path.clone(),
        None => env::current_dir()?,
    };
    let root = root
        .canonicalize()
        .with_context(|| format!("failed to resolve repo root {}", root.display()))?;
    let baseline = &config.baseline;

    check_web_workspace(&root, &baseline.app_dir)?;

    // 1) env file for the Next build
    let app_dir = root.join(&baseline.app_dir);
    let (env_local, outcome) = ensure_env_local(&app_dir)?;
    match outcome {
        WriteOutcome::Existing => println!("[OK] {} exists", env_local.display()),
        WriteOutcome::Created => println!("[OK] Created {}", env_local.display()),
    }

    // 2) deps
    if let Err(error) = run_streamed(&root, "npm", &["ci"]).await {
        tracing::warn!(%error, "npm ci failed");
        println!("[WARN] npm ci failed, trying npm install ...");
        run_streamed(&root, "npm", &["install", "--no-audit", "--no-fund"]).await?;
    }

    // 3) build Next
    run_streamed(&root, "npm", &["run", "web:build"]).await?;

    // 4) standalone or fallback
    let standalone = standalone_server_path(&root, &baseline.app_dir);
    let use_standalone = standalone.exists();
    if use_standalone {
        println!("[OK] Found standalone: {}", standalone.display());
    } else {
        println!(
            "[WARN] Standalone not found. Will run 'npm --workspace {} run start' via Playwright.",
            baseline.app_dir.display()
        );
    }

    // 5) choose port
    let port = find_free_port(baseline.port_start, baseline.port_span)?;
    println!("[OK] Using port {port}");

    // 6) ensure specs
    let visual_dir = root.join(&baseline.visual_dir);
    match ensure_visual_specs(&visual_dir)? {
        WriteOutcome::Existing => println!("[OK] {} exists", visual_dir.display()),
        WriteOutcome::Created => {
            println!("[OK] Created minimal visual specs in {}", visual_dir.display());
        }
    }

    // 7) local Playwright config
    let config_path = root.join(&baseline.config_name);
    write_runner_config(&config_path, &baseline.visual_dir, port)?;
    println!(
        "[OK] Wrote {} (port={port}, standalone={use_standalone})",
        config_path.display()
    );

    // 8) install browsers (exact version)
    let browsers = format!("playwright@{}", baseline.browsers_version);
    run_streamed(
        &root,
        "npx",
        &["--yes", &browsers, "install", "--with-deps", "chromium"],
    )
    .await?;

    // 9) run the runner (exact version) with the local config
    let runner = format!("@playwright/test@{}", baseline.runner_version);
    let config_arg = format!("./{}", baseline.config_name);
    run_streamed(
        &root,
        "npx",
        &["--yes", &runner, "test", "-c", &config_arg, "--update-snapshots"],
    )
    .await?;

    // 10) list created PNGs
    let snapshots = collect_baseline_snapshots(&visual_dir);
    if snapshots.is_empty() {
        println!(
            "\n[WARN] No PNG found in {}/**-snapshots/*.png; check test output above.",
            baseline.visual_dir.display()
        );
    } else {
        println!("\n[OK] PNG baseline created:");
        for snapshot in &snapshots {
            println!("  {}", snapshot.display());
        }
        println!("\nNext steps:");
        println!("  git add {}/**-snapshots/*.png", baseline.visual_dir.display());
        println!("  git commit -m \"test(visual): add baseline snapshots\"");
        println!("  git push");
    }

    println!("\nSUCCESS");
    Ok(())
}
