use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use parking_lot::Mutex;

/// "Repaint this widget" message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RedrawRequest<K> {
    pub widget: K,
}

/// Widgets with a request in flight. A widget is posted at most once until drained.
type Pending<K> = Arc<Mutex<HashSet<K>>>;

fn post<K: Copy + Eq + Hash>(tx: &Sender<RedrawRequest<K>>, pending: &Pending<K>, widget: K) -> bool {
    if !pending.lock().insert(widget) {
        return true;
    }
    if tx.send(RedrawRequest { widget }).is_err() {
        pending.lock().remove(&widget);
        return false;
    }
    true
}

/// Cloneable handle for posting redraw requests.
#[derive(Debug, Clone)]
pub struct RedrawSender<K> {
    tx: Sender<RedrawRequest<K>>,
    pending: Pending<K>,
}

impl<K: Copy + Eq + Hash> RedrawSender<K> {
    /// Posts a request. A disconnected queue drops it silently.
    pub fn request(&self, widget: K) {
        if !post(&self.tx, &self.pending, widget) {
            log::trace!("redraw queue closed; request dropped");
        }
    }
}

/// Channel from state changes (ticks, clicks, hovers) to the rendering side.
///
/// Requests are coalesced when posted: a widget that already has a request
/// waiting is not queued again, so the queue never holds more entries than
/// there are distinct widgets.
#[derive(Debug)]
pub struct RedrawQueue<K> {
    tx: Sender<RedrawRequest<K>>,
    rx: Receiver<RedrawRequest<K>>,
    pending: Pending<K>,
}

impl<K: Copy + Eq + Hash> RedrawQueue<K> {
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self { tx, rx, pending: Arc::new(Mutex::new(HashSet::new())) }
    }

    pub fn sender(&self) -> RedrawSender<K> {
        RedrawSender { tx: self.tx.clone(), pending: Arc::clone(&self.pending) }
    }

    pub fn request(&self, widget: K) {
        // The queue holds its own receiver, so posting cannot fail.
        post(&self.tx, &self.pending, widget);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    /// Number of queued requests.
    #[inline]
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    /// Takes every pending request in first-posted order.
    pub fn drain(&self) -> Vec<K> {
        let mut out: Vec<K> = Vec::new();
        for req in self.rx.try_iter() {
            self.pending.lock().remove(&req.widget);
            if !out.contains(&req.widget) {
                out.push(req.widget);
            }
        }
        out
    }
}

impl<K: Copy + Eq + Hash> Default for RedrawQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_coalesce_in_post_order() {
        let q = RedrawQueue::new();
        q.request(3);
        q.request(1);
        q.request(3);
        q.sender().request(2);
        assert_eq!(q.drain(), vec![3, 1, 2]);
        assert!(q.is_empty());
        assert!(q.drain().is_empty());
    }

    #[test]
    fn repeated_requests_do_not_grow_the_queue() {
        let q = RedrawQueue::new();
        let tx = q.sender();
        for _ in 0..1_000 {
            q.request(7u32);
            tx.request(7u32);
        }
        assert_eq!(q.len(), 1);
        assert_eq!(q.drain(), vec![7]);
    }

    #[test]
    fn drained_widget_can_be_posted_again() {
        let q = RedrawQueue::new();
        q.request(1u32);
        assert_eq!(q.drain(), vec![1]);
        q.request(1u32);
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn sender_works_from_another_thread() {
        let q = RedrawQueue::new();
        let tx = q.sender();
        std::thread::spawn(move || tx.request(7u32)).join().unwrap();
        assert_eq!(q.drain(), vec![7]);
    }
}
