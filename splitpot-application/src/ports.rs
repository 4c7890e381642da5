use splitpot_domain::{Group, ParticipantId};
use std::collections::HashMap;

/// Display-name resolution for the read side.
pub trait ParticipantDirectory: Send + Sync {
    fn display_name(&self, id: &ParticipantId) -> Option<&str>;
}

impl ParticipantDirectory for HashMap<ParticipantId, String> {
    fn display_name(&self, id: &ParticipantId) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

impl ParticipantDirectory for Group {
    fn display_name(&self, id: &ParticipantId) -> Option<&str> {
        self.participants
            .iter()
            .find(|p| &p.id == id)
            .map(|p| p.name.as_str())
    }
}
