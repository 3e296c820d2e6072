//! Channels, copied by shape only.
//!
//! A [`Channel`] owns both ends of an mpsc queue. Its deep copy is a new,
//! empty channel with the same capacity: messages waiting in the original
//! are not part of the copy.
//!
//! Capacity 0 is a rendezvous channel. Each message travels with a oneshot
//! acknowledgement, and `send` completes only once a receiver has taken it.

use std::fmt;

use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, oneshot};

use crate::{DeepCopy, ShapeKind};

/// An mpsc channel holding both its sender and its receiver.
pub struct Channel<T> {
    sender: ChannelSender<T>,
    receiver: Receiver<T>,
}

/// A cloneable sending handle to a [`Channel`].
pub struct ChannelSender<T> {
    flavor: Sender<T>,
}

/// A message on a rendezvous channel, with the signal its sender waits on.
struct Handoff<T> {
    value: T,
    taken: oneshot::Sender<()>,
}

impl<T> Handoff<T> {
    fn take(self) -> T {
        // The sender may have given up waiting; the value is delivered anyway.
        let _ = self.taken.send(());
        self.value
    }
}

enum Sender<T> {
    Bounded {
        capacity: usize,
        sender: mpsc::Sender<T>,
    },
    Unbounded(mpsc::UnboundedSender<T>),
    Rendezvous(mpsc::Sender<Handoff<T>>),
}

enum Receiver<T> {
    Bounded(mpsc::Receiver<T>),
    Unbounded(mpsc::UnboundedReceiver<T>),
    Rendezvous(mpsc::Receiver<Handoff<T>>),
}

impl<T> Channel<T> {
    /// A channel that holds at most `capacity` messages.
    ///
    /// A capacity of 0 makes a rendezvous channel with no buffer.
    pub fn bounded(capacity: usize) -> Self {
        if capacity == 0 {
            // One slot for the pending handoff; the acknowledgement keeps
            // the sender waiting until it is received.
            let (sender, receiver) = mpsc::channel(1);
            return Self {
                sender: ChannelSender {
                    flavor: Sender::Rendezvous(sender),
                },
                receiver: Receiver::Rendezvous(receiver),
            };
        }
        let (sender, receiver) = mpsc::channel(capacity);
        Self {
            sender: ChannelSender {
                flavor: Sender::Bounded { capacity, sender },
            },
            receiver: Receiver::Bounded(receiver),
        }
    }

    /// A channel with no capacity limit.
    pub fn unbounded() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender: ChannelSender {
                flavor: Sender::Unbounded(sender),
            },
            receiver: Receiver::Unbounded(receiver),
        }
    }

    /// Buffer capacity, `None` for unbounded channels.
    pub fn capacity(&self) -> Option<usize> {
        self.sender.capacity()
    }

    /// A sending handle, for use while this channel waits in [`recv`](Self::recv).
    pub fn sender(&self) -> ChannelSender<T> {
        self.sender.clone()
    }

    /// Number of buffered messages. Always 0 for a rendezvous channel.
    pub fn len(&self) -> usize {
        match &self.receiver {
            Receiver::Bounded(receiver) => receiver.len(),
            Receiver::Unbounded(receiver) => receiver.len(),
            Receiver::Rendezvous(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Queue a message without waiting. Hands it back when the channel is
    /// full. A rendezvous channel has no buffer, so this always hands the
    /// message back.
    pub fn try_send(&self, value: T) -> Result<(), T> {
        self.sender.try_send(value)
    }

    /// Queue a message, waiting for room in a bounded channel or for the
    /// receiver of a rendezvous channel.
    pub async fn send(&self, value: T) -> Result<(), T> {
        self.sender.send(value).await
    }

    /// Take the next message if one is queued.
    pub fn try_recv(&mut self) -> Option<T> {
        match &mut self.receiver {
            Receiver::Bounded(receiver) => receiver.try_recv().ok(),
            Receiver::Unbounded(receiver) => receiver.try_recv().ok(),
            Receiver::Rendezvous(receiver) => receiver.try_recv().ok().map(Handoff::take),
        }
    }

    /// Wait for the next message.
    ///
    /// The channel owns a sender, so this only returns `None` after
    /// [`close`](Self::close) once the queue is drained.
    pub async fn recv(&mut self) -> Option<T> {
        match &mut self.receiver {
            Receiver::Bounded(receiver) => receiver.recv().await,
            Receiver::Unbounded(receiver) => receiver.recv().await,
            Receiver::Rendezvous(receiver) => receiver.recv().await.map(Handoff::take),
        }
    }

    /// Stop accepting messages. Queued messages can still be received.
    pub fn close(&mut self) {
        match &mut self.receiver {
            Receiver::Bounded(receiver) => receiver.close(),
            Receiver::Unbounded(receiver) => receiver.close(),
            Receiver::Rendezvous(receiver) => receiver.close(),
        }
    }
}

impl<T> ChannelSender<T> {
    /// Buffer capacity of the channel, `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        match &self.flavor {
            Sender::Bounded { capacity, .. } => Some(*capacity),
            Sender::Unbounded(_) => None,
            Sender::Rendezvous(_) => Some(0),
        }
    }

    /// See [`Channel::try_send`].
    pub fn try_send(&self, value: T) -> Result<(), T> {
        match &self.flavor {
            Sender::Bounded { sender, .. } => sender.try_send(value).map_err(|err| match err {
                TrySendError::Full(value) | TrySendError::Closed(value) => value,
            }),
            Sender::Unbounded(sender) => sender.send(value).map_err(|err| err.0),
            Sender::Rendezvous(_) => Err(value),
        }
    }

    /// See [`Channel::send`].
    pub async fn send(&self, value: T) -> Result<(), T> {
        match &self.flavor {
            Sender::Bounded { sender, .. } => sender.send(value).await.map_err(|err| err.0),
            Sender::Unbounded(sender) => sender.send(value).map_err(|err| err.0),
            Sender::Rendezvous(sender) => {
                let (taken, received) = oneshot::channel();
                sender
                    .send(Handoff { value, taken })
                    .await
                    .map_err(|err| err.0.value)?;
                // Err here means the handoff was dropped with the receiver.
                let _ = received.await;
                Ok(())
            }
        }
    }
}

impl<T> Clone for ChannelSender<T> {
    fn clone(&self) -> Self {
        let flavor = match &self.flavor {
            Sender::Bounded { capacity, sender } => Sender::Bounded {
                capacity: *capacity,
                sender: sender.clone(),
            },
            Sender::Unbounded(sender) => Sender::Unbounded(sender.clone()),
            Sender::Rendezvous(sender) => Sender::Rendezvous(sender.clone()),
        };
        Self { flavor }
    }
}

impl<T> DeepCopy for Channel<T> {
    const KIND: ShapeKind = ShapeKind::Channel;

    fn deep_copy(&self) -> Self {
        match self.capacity() {
            Some(capacity) => Channel::bounded(capacity),
            None => Channel::unbounded(),
        }
    }
}

impl<T> fmt::Debug for Channel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish()
    }
}

impl<T> fmt::Debug for ChannelSender<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelSender")
            .field("capacity", &self.capacity())
            .finish()
    }
}
