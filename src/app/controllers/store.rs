//! Single owner of the resume being edited.
//!
//! Every mutation builds a new [`ResumeDocument`] and swaps it in, so a
//! snapshot handed out earlier (to a view, or to an in-flight save) never
//! changes underneath its holder. Subscribed views are called synchronously
//! with the new snapshot before the mutator returns.

use std::rc::Rc;

use crate::app::domain::list_edit::{
    self, EditableEntry, Education, Experience, ResumeList, Skills,
};
use crate::app::domain::resume::{EducationField, ExperienceField, ResumeDocument, ResumeField};
use crate::app::infrastructure::error::{AppError, Result};

type Observer = Box<dyn FnMut(&Rc<ResumeDocument>)>;

pub struct DocumentStore {
    current: Rc<ResumeDocument>,
    revision: u64,
    observers: Vec<Observer>,
}

impl DocumentStore {
    pub fn new(initial: ResumeDocument) -> Self {
        Self {
            current: Rc::new(initial),
            revision: 0,
            observers: Vec::new(),
        }
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.current
    }

    pub fn snapshot(&self) -> Rc<ResumeDocument> {
        self.current.clone()
    }

    /// Number of mutations applied since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a view to be notified after every mutation.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&Rc<ResumeDocument>) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn set_field(&mut self, field: ResumeField, value: impl Into<String>) {
        let mut next = (*self.current).clone();
        *next.field_mut(field) = value.into();
        self.commit(next);
    }

    /// Replace one attribute of the entry at `index` in list `L`.
    pub fn set_list_item<L: ResumeList>(
        &mut self,
        index: usize,
        field: <L::Entry as EditableEntry>::Field,
        value: impl Into<String>,
    ) -> Result<()> {
        let items = L::items(&self.current);
        let updated = list_edit::with_field(items, index, field, value.into())
            .ok_or_else(|| out_of_range::<L>(index, items.len()))?;
        self.commit_list::<L>(updated);
        Ok(())
    }

    /// Append a blank entry to list `L`, returning its index.
    pub fn add_list_item<L: ResumeList>(&mut self) -> usize {
        let updated = list_edit::with_appended(L::items(&self.current));
        let index = updated.len() - 1;
        self.commit_list::<L>(updated);
        log::debug!("Added {} entry at index {}", L::NAME, index);
        index
    }

    /// Remove the entry at `index` from list `L`; later entries shift down.
    pub fn remove_list_item<L: ResumeList>(&mut self, index: usize) -> Result<()> {
        let items = L::items(&self.current);
        let updated =
            list_edit::without(items, index).ok_or_else(|| out_of_range::<L>(index, items.len()))?;
        self.commit_list::<L>(updated);
        log::debug!("Removed {} entry at index {}", L::NAME, index);
        Ok(())
    }

    pub fn set_experience(
        &mut self,
        index: usize,
        field: ExperienceField,
        value: impl Into<String>,
    ) -> Result<()> {
        self.set_list_item::<Experience>(index, field, value)
    }

    pub fn set_education(
        &mut self,
        index: usize,
        field: EducationField,
        value: impl Into<String>,
    ) -> Result<()> {
        self.set_list_item::<Education>(index, field, value)
    }

    pub fn set_skill(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        self.set_list_item::<Skills>(index, (), value)
    }

    pub fn add_skill(&mut self) -> usize {
        self.add_list_item::<Skills>()
    }

    pub fn remove_skill(&mut self, index: usize) -> Result<()> {
        self.remove_list_item::<Skills>(index)
    }

    /// Swap in a whole new document.
    pub fn replace(&mut self, document: ResumeDocument) {
        self.commit(document);
    }

    fn commit_list<L: ResumeList>(&mut self, items: Vec<L::Entry>) {
        let mut next = (*self.current).clone();
        *L::items_mut(&mut next) = items;
        self.commit(next);
    }

    fn commit(&mut self, next: ResumeDocument) {
        self.current = Rc::new(next);
        self.revision += 1;
        let snapshot = self.current.clone();
        for observer in self.observers.iter_mut() {
            observer(&snapshot);
        }
    }
}

fn out_of_range<L: ResumeList>(index: usize, len: usize) -> AppError {
    log::warn!("Rejected {} edit at index {} (len {})", L::NAME, index, len);
    AppError::IndexOutOfRange {
        list: L::NAME,
        index,
        len,
    }
}
