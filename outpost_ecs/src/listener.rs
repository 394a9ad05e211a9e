//! Ordered lists of notification callbacks.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Unique identifier of the registered listener.
    pub struct ListenerId;
}

/// Callbacks which are invoked synchronously in registration order.
///
/// `F` is the unsized callback type, for example `dyn FnMut(&Event)`.
///
pub struct Listeners<F>
where
    F: ?Sized,
{
    ids: SlotMap<ListenerId, ()>,
    listeners: Vec<(ListenerId, Box<F>)>,
}

impl<F> Listeners<F>
where
    F: ?Sized,
{
    /// Creates an empty list of listeners.
    pub fn new() -> Self {
        Self {
            ids: SlotMap::with_key(),
            listeners: Vec::new(),
        }
    }

    /// Appends listener to the end of the list.
    pub fn insert(&mut self, listener: Box<F>) -> ListenerId {
        let id = self.ids.insert(());
        self.listeners.push((id, listener));
        id
    }

    /// Removes listener from the list.
    ///
    /// Returns `false` if there was no such listener.
    ///
    pub fn remove(&mut self, id: ListenerId) -> bool {
        if self.ids.remove(id).is_none() {
            return false;
        }
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        true
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Returns mutable iterator over all listeners in registration order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut F> {
        self.listeners
            .iter_mut()
            .map(|(_, listener)| &mut **listener)
    }
}

impl<F> Default for Listeners<F>
where
    F: ?Sized,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order() {
        let mut listeners: Listeners<dyn FnMut(&mut Vec<u32>)> = Listeners::new();
        listeners.insert(Box::new(|log: &mut Vec<u32>| log.push(1)));
        let second = listeners.insert(Box::new(|log: &mut Vec<u32>| log.push(2)));
        listeners.insert(Box::new(|log: &mut Vec<u32>| log.push(3)));

        let mut log = Vec::new();
        listeners.iter_mut().for_each(|listener| listener(&mut log));
        assert_eq!(log, [1, 2, 3]);

        assert!(listeners.remove(second));
        assert!(!listeners.remove(second));
        assert_eq!(listeners.len(), 2);

        let mut log = Vec::new();
        listeners.iter_mut().for_each(|listener| listener(&mut log));
        assert_eq!(log, [1, 3]);
    }
}
