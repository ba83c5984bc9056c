//! Transient notification overlay, stacked top-right.

use std::collections::VecDeque;

use eframe::egui;
use obsidian_forge_core::{Notice, NoticeKind};
use web_time::{Duration, Instant};

pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

struct Toast {
    notice: Notice,
    expires_at: Instant,
}

#[derive(Default)]
pub struct Toasts {
    items: VecDeque<Toast>,
}

impl Toasts {
    pub fn push(&mut self, notice: Notice, now: Instant) {
        self.items.push_back(Toast {
            notice,
            expires_at: now + TOAST_LIFETIME,
        });
    }

    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|t| t.expires_at > now);
    }

    #[cfg(test)]
    fn messages(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|t| t.notice.message.as_str())
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.prune(now);
        let Some(next_expiry) = self.items.iter().map(|t| t.expires_at).min() else {
            return;
        };

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_TOP, [-12.0, 48.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &self.items {
                    let (icon, color) = match toast.notice.kind {
                        NoticeKind::Success => ("✅", egui::Color32::from_rgb(80, 200, 120)),
                        NoticeKind::Error => ("❌", egui::Color32::from_rgb(220, 80, 80)),
                    };
                    egui::Frame::none()
                        .fill(egui::Color32::from_rgb(30, 32, 40))
                        .rounding(6.0)
                        .stroke(egui::Stroke::new(1.0, color))
                        .inner_margin(egui::Margin::symmetric(10.0, 8.0))
                        .show(ui, |ui| {
                            ui.set_max_width(320.0);
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(icon).size(14.0));
                                ui.label(
                                    egui::RichText::new(&toast.notice.message)
                                        .color(egui::Color32::WHITE),
                                );
                            });
                        });
                    ui.add_space(6.0);
                }
            });

        ctx.request_repaint_after(next_expiry.saturating_duration_since(now));
    }
}
