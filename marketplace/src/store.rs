use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

/// Handle returned by [Store::subscribe], used to stop receiving notifications
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SubscriptionId(usize);

/// Callback invoked with the new value after every change
type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Shared state behind a [Store]
struct StoreInner<T> {
    /// Current value
    value: T,
    /// Id handed to the next subscriber
    next_id: usize,
    /// Active subscribers in subscription order
    subscribers: Vec<(usize, Subscriber<T>)>,
}

/// Single-threaded observable state. Events mutate the store through [Store::update] or
/// [Store::set], every mutation notifies subscribers with a snapshot of the new value. Cloning a
/// store shares the state.
pub struct Store<T> {
    inner: Rc<RefCell<StoreInner<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Default + Clone + 'static> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + 'static> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Snapshot of the current value
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Read the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Mutate the value in place then notify subscribers
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.borrow_mut().value);
        self.notify();
    }

    /// Register `subscriber` to be called after every change
    pub fn subscribe(&self, subscriber: impl Fn(&T) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Rc::new(subscriber)));
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .borrow_mut()
            .subscribers
            .retain(|(subscriber_id, _)| *subscriber_id != id.0);
    }

    /// Calls subscribers outside of the borrow so they may read or update the store
    fn notify(&self) {
        let (snapshot, subscribers) = {
            let inner = self.inner.borrow();
            let subscribers: Vec<Subscriber<T>> = inner
                .subscribers
                .iter()
                .map(|(_, subscriber)| Rc::clone(subscriber))
                .collect();
            (inner.value.clone(), subscribers)
        };
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }
}

/// Tracks whether the view owning a workflow is still mounted. Responses that arrive after
/// [Liveness::end] are dropped instead of written to stores.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Default for Liveness {
    fn default() -> Self {
        Self(Rc::new(Cell::new(true)))
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn end(&self) {
        self.0.set(false);
    }
}
