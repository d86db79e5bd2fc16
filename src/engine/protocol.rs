use crate::model::turn::Conversation;

#[derive(Debug)]
pub enum EngineCommand {
    SubmitUserText(String),
}

#[derive(Debug)]
pub enum EngineResponse {
    Busy(bool),
    History(Conversation),
    GenerationFailed(String),
}
