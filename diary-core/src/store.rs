//! In-memory entry collections for one diary-form session.
//!
//! Entries carry a generated id so a rendered row can be deleted without
//! capturing its position; removal keeps the survivors in insertion order.

use shared::{
    generate_entry_id, parse_entry_id, CategoryKind, DelayEntry, EquipmentEntry, MaterialEntry,
    OtherCostEntry, OvertimeEntry, SubcontractorEntry,
};

/// A stored entry: the wire record plus the stable id its rendered row
/// refers back to.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredEntry<T> {
    pub id: String,
    pub record: T,
}

/// One category's insertion-ordered entry list.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryList<T> {
    category: CategoryKind,
    entries: Vec<StoredEntry<T>>,
}

impl<T: Clone> CategoryList<T> {
    pub fn new(category: CategoryKind) -> Self {
        Self {
            category,
            entries: Vec::new(),
        }
    }

    pub fn category(&self) -> CategoryKind {
        self.category
    }

    /// Append a record and return its generated id.
    pub fn add(&mut self, record: T) -> String {
        let id = generate_entry_id(self.category);
        self.entries.push(StoredEntry {
            id: id.clone(),
            record,
        });
        id
    }

    /// Remove the entry with the given id, returning its record. Unknown
    /// ids are a no-op.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let position = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(position).record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StoredEntry<T>> {
        self.entries.iter()
    }

    /// The wire records in insertion order, without ids.
    pub fn records(&self) -> Vec<&T> {
        self.entries.iter().map(|entry| &entry.record).collect()
    }
}

/// The six per-category lists of the diary form, composed into one store.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryListStore {
    pub materials: CategoryList<MaterialEntry>,
    pub equipment: CategoryList<EquipmentEntry>,
    pub other_costs: CategoryList<OtherCostEntry>,
    pub overtime: CategoryList<OvertimeEntry>,
    pub subcontractors: CategoryList<SubcontractorEntry>,
    pub delays: CategoryList<DelayEntry>,
}

impl EntryListStore {
    pub fn new() -> Self {
        Self {
            materials: CategoryList::new(CategoryKind::Materials),
            equipment: CategoryList::new(CategoryKind::Equipment),
            other_costs: CategoryList::new(CategoryKind::OtherCosts),
            overtime: CategoryList::new(CategoryKind::Overtime),
            subcontractors: CategoryList::new(CategoryKind::Subcontractors),
            delays: CategoryList::new(CategoryKind::Delays),
        }
    }

    /// Remove an entry by id, routing on the category encoded in the id.
    /// Returns whether an entry was actually removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let Ok((category, _)) = parse_entry_id(id) else {
            return false;
        };
        match category {
            CategoryKind::Materials => self.materials.remove(id).is_some(),
            CategoryKind::Equipment => self.equipment.remove(id).is_some(),
            CategoryKind::OtherCosts => self.other_costs.remove(id).is_some(),
            CategoryKind::Overtime => self.overtime.remove(id).is_some(),
            CategoryKind::Subcontractors => self.subcontractors.remove(id).is_some(),
            CategoryKind::Delays => self.delays.remove(id).is_some(),
        }
    }

    pub fn len(&self, category: CategoryKind) -> usize {
        match category {
            CategoryKind::Materials => self.materials.len(),
            CategoryKind::Equipment => self.equipment.len(),
            CategoryKind::OtherCosts => self.other_costs.len(),
            CategoryKind::Overtime => self.overtime.len(),
            CategoryKind::Subcontractors => self.subcontractors.len(),
            CategoryKind::Delays => self.delays.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        CategoryKind::ALL.iter().all(|category| self.len(*category) == 0)
    }
}

impl Default for EntryListStore {
    fn default() -> Self {
        Self::new()
    }
}
