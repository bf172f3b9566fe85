//! In-memory todo storage.
//!
//! # Design
//! A `BTreeMap` keyed by id plus a forward-only `next_id` counter. The map
//! keeps `list` output in ascending id order, which the API does not promise
//! but makes responses stable. Every record satisfies `record.id == key`, and
//! `next_id` is strictly greater than any id ever assigned.

use std::collections::BTreeMap;

use crate::error::StoreError;
use crate::types::Todo;

#[derive(Debug, Clone)]
pub struct TodoStore {
    todos: BTreeMap<i64, Todo>,
    next_id: i64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// All live records.
    pub fn list(&self) -> Vec<Todo> {
        self.todos.values().cloned().collect()
    }

    /// Insert a new record under the next id and return it.
    pub fn create(&mut self, text: String, completed: bool) -> Todo {
        let todo = Todo {
            id: self.next_id,
            text,
            completed,
        };
        self.next_id += 1;
        self.todos.insert(todo.id, todo.clone());
        todo
    }

    pub fn get(&self, id: i64) -> Result<Todo, StoreError> {
        self.todos.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// Overwrite `text` and `completed` of an existing record. The id never
    /// changes.
    pub fn replace(&mut self, id: i64, text: String, completed: bool) -> Result<Todo, StoreError> {
        let todo = self.todos.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        todo.text = text;
        todo.completed = completed;
        Ok(todo.clone())
    }

    pub fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        self.todos
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// The id the next `create` will assign.
    pub fn next_id(&self) -> i64 {
        self.next_id
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
