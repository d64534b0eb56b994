use {tokenfactory::EventSink, tokenfactory_types::FactoryEvent};

/// Keeps every emitted event, in order.
#[derive(Debug, Clone, Default)]
pub struct EventCollector {
    events: Vec<FactoryEvent>,
}

impl EventCollector {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&FactoryEvent> {
        self.events.last()
    }

    /// Drop events emitted after the first `len`.
    pub fn truncate(&mut self, len: usize) {
        self.events.truncate(len);
    }

    pub fn drain(&mut self) -> Vec<FactoryEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for EventCollector {
    fn emit(&mut self, event: FactoryEvent) {
        tracing::debug!(event = event.name(), "Emitted event");

        self.events.push(event);
    }
}
