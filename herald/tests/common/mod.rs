use herald::{BoxError, Event, Handler, Listener, Payload};
use std::sync::{Arc, Mutex};

// ============================================================================
// Test Payload Types
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Note {
    pub content: String,
}

impl Payload for Note {}

/// Delivery log shared across listeners: `(listener, event, content)`.
pub type DeliveryLog = Arc<Mutex<Vec<(String, String, String)>>>;

// ============================================================================
// Test Handlers and Listeners
// ============================================================================

/// Records a fixed phrase into a shared log when invoked.
pub struct SoundHandler {
    pub sound: &'static str,
    pub recorded: Arc<Mutex<Vec<String>>>,
}

impl Handler<()> for SoundHandler {
    type Output = ();

    async fn invoke(&self, _args: ()) -> Result<(), BoxError> {
        self.recorded.lock().unwrap().push(self.sound.to_string());
        Ok(())
    }
}

/// Returns its argument unchanged.
pub struct EchoHandler;

impl Handler<String> for EchoHandler {
    type Output = String;

    async fn invoke(&self, args: String) -> Result<String, BoxError> {
        Ok(args)
    }
}

/// Appends to a log shared across listeners, so tests can assert
/// cross-listener delivery order.
pub struct NamedListener {
    name: String,
    deliveries: DeliveryLog,
}

impl NamedListener {
    pub fn new(name: impl Into<String>, deliveries: DeliveryLog) -> Self {
        Self {
            name: name.into(),
            deliveries,
        }
    }
}

impl Listener<Note> for NamedListener {
    fn update(&self, event: &Event<Note>) -> Result<(), BoxError> {
        self.deliveries.lock().unwrap().push((
            self.name.clone(),
            event.name().to_string(),
            event.payload().content.clone(),
        ));
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
