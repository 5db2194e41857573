//! Per-engine publish/subscribe of lifecycle events.
//!
//! Two ways to observe an engine: register callbacks per [`EventKind`] with
//! [`EventHub::on`] / [`EventHub::once`], or take a
//! [`broadcast::Receiver`] from [`EventHub::subscribe`] and drain it with
//! `try_recv` between frames. No async runtime is involved.

use std::fmt;

use rebound_model::Point;
use tokio::sync::broadcast;

/// Capacity of the broadcast channel behind [`EventHub::subscribe`]. Slow
/// receivers observe `Lagged` rather than blocking the engine.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollEvent {
    /// A pointer went down; published before anything moves.
    BeforeScrollStart,
    /// The first accepted drag sample (or first mouse-wheel notch).
    ScrollStart,
    Scroll(Point),
    /// The pointer was released without moving.
    ScrollCancel,
    ScrollEnd(Point),
    TouchEnd(Point),
    Flick,
    Refresh,
    Destroy,
    PullingDown,
    PullingUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    BeforeScrollStart,
    ScrollStart,
    Scroll,
    ScrollCancel,
    ScrollEnd,
    TouchEnd,
    Flick,
    Refresh,
    Destroy,
    PullingDown,
    PullingUp,
}

impl ScrollEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ScrollEvent::BeforeScrollStart => EventKind::BeforeScrollStart,
            ScrollEvent::ScrollStart => EventKind::ScrollStart,
            ScrollEvent::Scroll(_) => EventKind::Scroll,
            ScrollEvent::ScrollCancel => EventKind::ScrollCancel,
            ScrollEvent::ScrollEnd(_) => EventKind::ScrollEnd,
            ScrollEvent::TouchEnd(_) => EventKind::TouchEnd,
            ScrollEvent::Flick => EventKind::Flick,
            ScrollEvent::Refresh => EventKind::Refresh,
            ScrollEvent::Destroy => EventKind::Destroy,
            ScrollEvent::PullingDown => EventKind::PullingDown,
            ScrollEvent::PullingUp => EventKind::PullingUp,
        }
    }

    /// Position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            ScrollEvent::Scroll(p)
            | ScrollEvent::ScrollEnd(p)
            | ScrollEvent::TouchEnd(p) => Some(*p),
            _ => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::BeforeScrollStart => "beforeScrollStart",
            EventKind::ScrollStart => "scrollStart",
            EventKind::Scroll => "scroll",
            EventKind::ScrollCancel => "scrollCancel",
            EventKind::ScrollEnd => "scrollEnd",
            EventKind::TouchEnd => "touchEnd",
            EventKind::Flick => "flick",
            EventKind::Refresh => "refresh",
            EventKind::Destroy => "destroy",
            EventKind::PullingDown => "pullingDown",
            EventKind::PullingUp => "pullingUp",
        };
        f.write_str(name)
    }
}

/// Handle returned by [`EventHub::on`] for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Handler = Box<dyn FnMut(&ScrollEvent)>;

struct Listener {
    id: ListenerId,
    kind: EventKind,
    once: bool,
    handler: Handler,
}

pub struct EventHub {
    listeners: Vec<Listener>,
    next_id: u64,
    sender: broadcast::Sender<ScrollEvent>,
    channel_capacity: usize,
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("listeners", &self.listeners.len())
            .field("channel_capacity", &self.channel_capacity)
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}

impl EventHub {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);
        Self {
            listeners: Vec::new(),
            next_id: 0,
            sender,
            channel_capacity: capacity,
        }
    }

    pub fn on(
        &mut self,
        kind: EventKind,
        handler: impl FnMut(&ScrollEvent) + 'static,
    ) -> ListenerId {
        self.register(kind, false, Box::new(handler))
    }

    /// Like [`on`](Self::on) but removed after its first invocation.
    pub fn once(
        &mut self,
        kind: EventKind,
        handler: impl FnMut(&ScrollEvent) + 'static,
    ) -> ListenerId {
        self.register(kind, true, Box::new(handler))
    }

    fn register(
        &mut self,
        kind: EventKind,
        once: bool,
        handler: Handler,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {
            id,
            kind,
            once,
            handler,
        });
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.id != id);
        self.listeners.len() != before
    }

    /// Invoke matching listeners in registration order, then fan out to
    /// channel subscribers.
    pub fn emit(&mut self, event: ScrollEvent) {
        let kind = event.kind();
        let mut fired_once = false;
        for listener in self.listeners.iter_mut().filter(|l| l.kind == kind) {
            (listener.handler)(&event);
            fired_once |= listener.once;
        }
        if fired_once {
            self.listeners.retain(|l| !(l.once && l.kind == kind));
        }

        // No receivers is not an error for a publisher.
        let _ = self.sender.send(event);
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.iter().filter(|l| l.kind == kind).count()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ScrollEvent> {
        self.sender.subscribe()
    }

    /// Drop every callback listener. Channel receivers stay connected.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}
