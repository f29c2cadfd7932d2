use std::sync::Arc;
use std::time::{Duration, Instant};

use egui::{Context, RichText};
use reqwest::Url;
use tokio::runtime::Handle;

use crate::account::submit::{Action, SubmitState, SubmitStore};
use crate::app::add_account::{FormEvent, show_form};
use crate::app::view::FormView;
use crate::init::VERSION;
use crate::settings::Settings;
use crate::utils::message::ToastKind;

mod add_account;
pub mod init;
pub mod view;

pub struct AccountAdder {
    view: FormView,
    store: SubmitStore,

    settings: Arc<Settings>,
    accounts_url: Option<Url>,
}

impl AccountAdder {
    pub fn new(
        ctx: Context,
        store: SubmitStore,
        handle: Handle,
        settings: Settings,
        code: impl Into<String>,
    ) -> Self {
        // Submissions finish off the ui thread, wake it up when they do
        let mut rx = store.subscribe();
        handle.spawn(async move {
            while rx.changed().await.is_ok() {
                ctx.request_repaint();
            }
        });

        let accounts_url = match settings.accounts_url() {
            Ok(u) => Some(u),
            Err(e) => {
                log::warn!("No accounts link: {e:#}");
                None
            }
        };

        Self {
            view: FormView::new(code, store.subscribe()),
            store,

            settings: Arc::new(settings),
            accounts_url,
        }
    }

    fn submit(&mut self) {
        match self.view.form.validate() {
            Ok(draft) => {
                let _ = self.store.dispatch(Action::Submit(draft));
            }
            Err(e) => log::debug!("Form not submitted, {e}"),
        }
    }

    fn edited(&mut self) {
        if let Some(action) = self.view.edited() {
            let _ = self.store.dispatch(action);
        }
    }

    fn show_toasts(&mut self, ctx: &Context) {
        let mut dismissed = None;
        let toasts = &mut self.view.toasts;

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -36.0])
            .show(ctx, |ui| {
                for (i, (toast, _)) in toasts.current(Instant::now()).iter().enumerate() {
                    let fill = match toast.kind {
                        ToastKind::Default => ui.visuals().extreme_bg_color,
                        ToastKind::Destructive => ui.visuals().error_fg_color.gamma_multiply(0.35),
                    };

                    egui::Frame::popup(ui.style()).fill(fill).show(ui, |ui| {
                        ui.set_max_width(280.0);
                        ui.label(RichText::new(&toast.title).strong());
                        ui.label(toast.description.as_str());
                        if ui.small_button("Dismiss").clicked() {
                            dismissed = Some(i);
                        }
                    });
                }
            });

        if let Some(i) = dismissed {
            self.view.toasts.dismiss(i);
        }

        if !self.view.toasts.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

impl eframe::App for AccountAdder {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("Closing, the unsaved draft is dropped");
    }

    fn update(&mut self, ctx: &Context, _fr: &mut eframe::Frame) {
        let _ = self.view.poll();

        egui::TopBottomPanel::bottom("main-bot-bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let status = match self.view.state() {
                    SubmitState::Idle => "Waiting for input",
                    SubmitState::Exchanging => "Exchanging the authorization code",
                    SubmitState::Persisting => "Saving the account",
                    SubmitState::Done => "Account added",
                    SubmitState::Failed => "Last attempt failed",
                };

                ui.label(format!("account-adder: v{VERSION} - {status}"));
            });
        });

        let busy = self.view.state().is_busy();
        let mut event = FormEvent::None;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                event = show_form(
                    ui,
                    &mut self.view.form,
                    busy,
                    &self.settings.authorize,
                    &self.view.oauth_state,
                    self.accounts_url.as_ref(),
                );
            });
        });

        match event {
            FormEvent::Submit => self.submit(),
            FormEvent::Edited => self.edited(),
            FormEvent::None => {}
        }

        self.show_toasts(ctx);
    }
}
