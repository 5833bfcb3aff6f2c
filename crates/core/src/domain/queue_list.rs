// Queue List - the queues one discovery pass found in a process

use super::error::{DomainError, Result};
use super::ids::{Address, QueueId};
use super::queue::Queue;

/// Per-process queue set, in discovery order
///
/// Queue ids are unique within the list at any point in time.
#[derive(Debug, Default)]
pub struct QueueList {
    queues: Vec<Queue>,
}

impl QueueList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a discovered queue
    ///
    /// # Errors
    /// - DomainError::DuplicateQueueId if a queue with the same id is present
    pub fn add(&mut self, queue: Queue) -> Result<()> {
        if self.find_by_id(queue.id()).is_some() {
            return Err(DomainError::DuplicateQueueId(queue.id()));
        }
        self.queues.push(queue);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.queues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }

    pub fn clear(&mut self) {
        self.queues.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Queue> {
        self.queues.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Queue> {
        self.queues.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Queue> {
        self.queues.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Queue> {
        self.queues.iter_mut()
    }

    pub fn find_by_id(&self, id: QueueId) -> Option<&Queue> {
        self.queues.iter().find(|queue| queue.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: QueueId) -> Option<&mut Queue> {
        self.queues.iter_mut().find(|queue| queue.id() == id)
    }

    pub fn find_by_index_id(&self, index_id: u64) -> Option<&Queue> {
        self.queues.iter().find(|queue| queue.index_id() == index_id)
    }

    /// Look a queue up by the runtime's queue object address
    ///
    /// `Address::INVALID` never matches, even against queues whose address
    /// was never resolved.
    pub fn find_by_native_address(&self, address: Address) -> Option<&Queue> {
        if !address.is_valid() {
            return None;
        }
        self.queues
            .iter()
            .find(|queue| queue.native_address() == address)
    }
}

impl<'a> IntoIterator for &'a QueueList {
    type Item = &'a Queue;
    type IntoIter = std::slice::Iter<'a, Queue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut QueueList {
    type Item = &'a mut Queue;
    type IntoIter = std::slice::IterMut<'a, Queue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
