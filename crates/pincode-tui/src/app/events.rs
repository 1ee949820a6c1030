//! Event handling for the TUI

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use pincode_core::SubmitTicket;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Bracketed paste
    Paste(String),
    /// Terminal resized
    Resize(u16, u16),
    /// Terminal tick (header clock)
    Tick,
    /// Simulated submit delay elapsed
    SubmitElapsed(SubmitTicket),
}

/// Sender half handed to tasks that post events
pub type EventSender = mpsc::UnboundedSender<Event>;

/// Merges terminal input, ticks and internal events into one queue
pub struct EventHandler {
    /// Sender for events
    sender: EventSender,
    /// Receiver for events
    receiver: mpsc::UnboundedReceiver<Event>,
    /// Tick rate for the clock
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver,
            tick_rate,
        }
    }

    /// Get a clone of the sender for other tasks to send events
    pub fn sender(&self) -> EventSender {
        self.sender.clone()
    }

    /// Receive the next event
    pub async fn recv(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }

    /// Spawn the task forwarding terminal input and ticks into the queue.
    ///
    /// The task ends when the terminal stream ends or the queue is dropped.
    pub fn spawn_terminal_reader(&self) -> JoinHandle<()> {
        let sender = self.sender.clone();
        let tick_rate = self.tick_rate;

        tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut interval = tokio::time::interval(tick_rate);

            loop {
                let event = tokio::select! {
                    _ = interval.tick() => Event::Tick,
                    next = reader.next() => match next {
                        Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                            Event::Key(key)
                        }
                        Some(Ok(CrosstermEvent::Paste(text))) => Event::Paste(text),
                        Some(Ok(CrosstermEvent::Resize(w, h))) => Event::Resize(w, h),
                        Some(Ok(_)) => continue,
                        Some(Err(e)) => {
                            tracing::error!("Terminal input error: {}", e);
                            break;
                        }
                        None => break,
                    },
                };

                if sender.send(event).is_err() {
                    break;
                }
            }
        })
    }
}

/// Post [`Event::SubmitElapsed`] for `ticket` once `delay` has passed.
///
/// There is no cancellation; the form discards tickets it no longer tracks.
pub fn schedule_submit(sender: &EventSender, ticket: SubmitTicket, delay: Duration) {
    let sender = sender.clone();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if sender.send(Event::SubmitElapsed(ticket)).is_err() {
            tracing::debug!(ticket = ticket.id(), "event queue closed before submit finished");
        }
    });
}
