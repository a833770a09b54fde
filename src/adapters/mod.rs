// Adapters layer: concrete implementations of the domain ports.

pub mod memory;
pub mod webhook;

pub use memory::InMemoryDirectory;
pub use webhook::WebhookNotifier;
