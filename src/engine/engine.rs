use std::sync::mpsc::{Receiver, Sender};

use log::debug;

use crate::engine::client::Generate;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::session::ChatSession;

/// Owns the session and the generation client on a dedicated thread,
/// so the single blocking round trip never stalls the UI. Commands are
/// processed one at a time; a second submission cannot start until the
/// previous round trip has finished.
pub struct Engine<G: Generate> {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    session: ChatSession,
    client: G,
}

impl<G: Generate> Engine<G> {
    pub fn new(rx: Receiver<EngineCommand>, tx: Sender<EngineResponse>, client: G) -> Self {
        Self {
            rx,
            tx,
            session: ChatSession::new(),
            client,
        }
    }

    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::SubmitUserText(text) => {
                    if text.trim().is_empty() {
                        continue;
                    }

                    let _ = self.tx.send(EngineResponse::Busy(true));

                    self.session.handle_user_message(&text, &self.client);

                    if let Some(err) = self.session.last_error() {
                        let _ = self
                            .tx
                            .send(EngineResponse::GenerationFailed(err.to_string()));
                    }
                    let _ = self
                        .tx
                        .send(EngineResponse::History(self.session.conversation().clone()));
                    let _ = self.tx.send(EngineResponse::Busy(self.session.is_busy()));

                    debug!(
                        "conversation now has {} turns",
                        self.session.conversation().len()
                    );
                }
            }
        }
    }
}
