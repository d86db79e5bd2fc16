use std::sync::mpsc;
use std::time::Duration;

use eframe::egui;

use crate::config::AppConfig;
use crate::engine::client::CohereClient;
use crate::engine::engine::Engine;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::turn::{Conversation, Speaker, Turn};
use crate::ui::background::load_background;
use crate::ui::theme::Theme;

const INTRO: &str =
    "I'm here to listen and offer support. Type in how you're feeling or any mental health concern you have.";

/// Rendering collaborator. Mirrors session state received over the
/// response channel; never touches the session itself.
pub struct ChatApp {
    input_text: String,
    conversation: Conversation,
    busy: bool,
    last_error: Option<String>,
    should_auto_scroll: bool,

    theme: Theme,
    background: Option<egui::TextureHandle>,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl ChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let background = load_background(&config.background_path).map(|img| {
            cc.egui_ctx
                .load_texture("backdrop", img, egui::TextureOptions::LINEAR)
        });

        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let client = CohereClient::new(config.api_key);

        std::thread::spawn(move || {
            let mut engine = Engine::new(cmd_rx, resp_tx, client);
            engine.run();
        });

        Self {
            input_text: String::new(),
            conversation: Conversation::new(),
            busy: false,
            last_error: None,
            should_auto_scroll: false,
            theme: Theme::default(),
            background,
            cmd_tx,
            resp_rx,
        }
    }

    fn submit_input(&mut self) {
        if self.busy {
            return;
        }

        let text = self.input_text.trim().to_string();
        if text.is_empty() {
            return;
        }

        let _ = self.cmd_tx.send(EngineCommand::SubmitUserText(text));
        self.input_text.clear();
        self.last_error = None;
        // Mirror optimistically; the engine confirms with Busy(false)
        // when the round trip finishes.
        self.busy = true;
    }

    fn draw_turn(&self, ui: &mut egui::Ui, turn: &Turn) {
        ui.add_space(6.0);

        match turn.speaker {
            Speaker::User => {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    self.bubble(ui, self.theme.user_text, turn);
                });
            }
            Speaker::Bot => {
                self.bubble(ui, self.theme.bot_text, turn);
            }
        }
    }

    fn bubble(&self, ui: &mut egui::Ui, text_color: egui::Color32, turn: &Turn) {
        egui::Frame::none()
            .fill(self.theme.bubble_fill)
            .rounding(egui::Rounding::same(12.0))
            .inner_margin(egui::Margin::symmetric(12.0, 8.0))
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.8);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&turn.text).color(text_color));
                    if let Some(timestamp) = turn.timestamp {
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::TOP),
                            |ui| {
                                ui.label(
                                    egui::RichText::new(timestamp.format("%H:%M").to_string())
                                        .color(self.theme.timestamp)
                                        .size(10.0),
                                );
                            },
                        );
                    }
                });
            });
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(resp) = self.resp_rx.try_recv() {
            match resp {
                EngineResponse::Busy(busy) => self.busy = busy,
                EngineResponse::History(conversation) => {
                    self.conversation = conversation;
                    self.should_auto_scroll = true;
                }
                EngineResponse::GenerationFailed(message) => self.last_error = Some(message),
            }
        }

        // Keep polling the response channel while a round trip is in
        // flight; egui repaints only on input otherwise.
        if self.busy {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        let input_id = egui::Id::new("chat_input_box");

        // ---------- Input bar ----------
        egui::TopBottomPanel::bottom("chat_input").show(ctx, |ui| {
            ui.add_space(6.0);

            if let Some(message) = &self.last_error {
                ui.colored_label(
                    self.theme.error,
                    format!("Error generating response: {message}"),
                );
                ui.add_space(4.0);
            }

            let mut send_now = false;

            ui.horizontal(|ui| {
                let response = ui.add_sized(
                    [ui.available_width() - 64.0, 24.0],
                    egui::TextEdit::singleline(&mut self.input_text)
                        .id(input_id)
                        .hint_text("Type your message here..."),
                );

                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    send_now = true;
                }

                if ui
                    .add_enabled(!self.busy, egui::Button::new("Send"))
                    .clicked()
                {
                    send_now = true;
                }
            });

            if self.busy {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label("Generating response...");
                });
            }

            ui.add_space(6.0);

            if send_now {
                self.submit_input();
                ui.memory_mut(|m| m.request_focus(input_id));
            }
        });

        // ---------- Chat log ----------
        let frame = egui::Frame::none().fill(self.theme.backdrop);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            if let Some(texture) = &self.background {
                ui.painter().image(
                    texture.id(),
                    ui.max_rect(),
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }

            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.heading("Serenica - Mental Health Support Chatbot");
                ui.label(egui::RichText::new(INTRO).color(self.theme.timestamp));
            });
            ui.add_space(8.0);

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(self.should_auto_scroll)
                .show(ui, |ui| {
                    if self.conversation.is_empty() {
                        ui.add_space(12.0);
                        ui.vertical_centered(|ui| {
                            ui.label(
                                egui::RichText::new("Your conversation will appear here.")
                                    .color(self.theme.timestamp)
                                    .italics(),
                            );
                        });
                    } else {
                        for turn in self.conversation.turns() {
                            self.draw_turn(ui, turn);
                        }
                    }
                    ui.add_space(8.0);
                });
        });

        self.should_auto_scroll = false;
    }
}
