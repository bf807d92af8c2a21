//! Notify-on-change plumbing for view-model state containers.
//!
//! View layers subscribe a listener and re-render when an event arrives; the
//! view-models never know which rendering mechanism sits on the other side.

/// Handle returned by [`ChangeNotifier::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Boxed listener callback.
type Listener<E> = Box<dyn Fn(&E) + Send + Sync>;

/// Ordered list of listeners for events of type `E`.
pub struct ChangeNotifier<E> {
    /// Registered listeners in subscription order.
    listeners: Vec<(SubscriptionId, Listener<E>)>,
    /// Next id to hand out.
    next_id: u64,
}

impl<E> Default for ChangeNotifier<E> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }
}

impl<E> std::fmt::Debug for ChangeNotifier<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<E> ChangeNotifier<E> {
    /// What: Register a listener.
    ///
    /// Inputs:
    /// - `listener`: Callback invoked with every subsequent event
    ///
    /// Output:
    /// - `SubscriptionId` to pass to [`Self::unsubscribe`].
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Deliver `event` to every listener in subscription order.
    pub fn notify(&self, event: &E) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
