use std::thread::{available_parallelism, spawn};

use anyhow::{Result, anyhow};
use eframe::{NativeOptions, run_native};
use tokio::runtime::Builder;
use tokio::sync::oneshot;

use crate::account::submit::SubmitStore;
use crate::app::AccountAdder;
use crate::cli::Cli;
use crate::init::{init_appdir, init_reqwest};
use crate::logs::init_logs;
use crate::settings::Settings;

pub fn launch(cli: Cli) -> Result<()> {
    let appdir = match &cli.appdir {
        Some(p) => p.clone(),
        None => init_appdir()?,
    };

    init_logs(&appdir)?;
    log::info!("Using app directory {appdir:?}");

    let mut settings = Settings::load(&appdir)?;
    if let Some(base) = &cli.base_url {
        log::info!("Using backend {base} for this run");
        settings.base_url = base.clone();
    }

    let base = settings.base_url()?;
    let cl = init_reqwest(&base)?;
    let code = cli.initial_code();
    if code.is_empty() {
        log::warn!("No authorization code given, the form can't be submitted without one");
    }

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let rt = Builder::new_multi_thread()
        .worker_threads(available_parallelism()?.get().min(4))
        .thread_name("account-adder (async rt)")
        .enable_all()
        .build()?;

    let handle = rt.handle().clone();
    let rt_thread = spawn(move || {
        rt.block_on(async {
            let _ = stop_rx.await;
            log::warn!("Async runtime is now stopping...");
        });
    });

    let store = SubmitStore::new(cl, base, handle.clone());
    let opt = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Add Account")
            .with_inner_size([440.0, 620.0]),
        ..Default::default()
    };

    let e = run_native(
        "Account Adder",
        opt,
        Box::new(move |cc| {
            Ok(Box::new(AccountAdder::new(
                cc.egui_ctx.clone(),
                store,
                handle,
                settings,
                code,
            )))
        }),
    );

    if let Err(e) = e {
        log::error!("Failed to start account adder: {e:?}");
    }

    let _ = stop_tx.send(());
    rt_thread
        .join()
        .map_err(|_| anyhow!("Async runtime thread panicked"))?;

    Ok(())
}
