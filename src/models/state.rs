//! Check-in session state handed to the action by the host workflow

use super::candidate::CandidateGroupType;
use super::ids::{FamilyId, GroupTypeId, PersonId};
use serde::{Deserialize, Serialize};

/// Snapshot of one kiosk session's in-progress selections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInState {
    #[serde(default)]
    pub families: Vec<Family>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    pub family_id: FamilyId,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub people: Vec<Person>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub person_id: PersonId,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub group_types: Vec<CandidateGroupType>,
}

impl CheckInState {
    pub fn new(families: Vec<Family>) -> Self {
        Self { families }
    }

    /// Selected people of selected families, in session order
    pub fn selected_people_mut(&mut self) -> impl Iterator<Item = &mut Person> {
        self.families
            .iter_mut()
            .filter(|family| family.selected)
            .flat_map(|family| family.people.iter_mut())
            .filter(|person| person.selected)
    }

    pub fn find_person(&self, person_id: PersonId) -> Option<&Person> {
        self.families
            .iter()
            .flat_map(|family| family.people.iter())
            .find(|person| person.person_id == person_id)
    }
}

impl Family {
    /// A family already chosen at the kiosk
    pub fn selected(family_id: impl Into<FamilyId>) -> Self {
        Self {
            family_id: family_id.into(),
            selected: true,
            people: Vec::new(),
        }
    }

    pub fn with_person(mut self, person: Person) -> Self {
        self.people.push(person);
        self
    }
}

impl Person {
    /// A person already chosen for check-in
    pub fn selected(person_id: impl Into<PersonId>) -> Self {
        Self {
            person_id: person_id.into(),
            selected: true,
            group_types: Vec::new(),
        }
    }

    pub fn with_group_type(mut self, group_type: CandidateGroupType) -> Self {
        self.group_types.push(group_type);
        self
    }

    /// Group types this person may check into this session, deduplicated in order
    pub fn eligible_group_type_ids(&self) -> Vec<GroupTypeId> {
        let mut ids: Vec<GroupTypeId> = Vec::with_capacity(self.group_types.len());
        for group_type in &self.group_types {
            if !ids.contains(&group_type.group_type_id) {
                ids.push(group_type.group_type_id);
            }
        }
        ids
    }

    pub fn has_selection(&self) -> bool {
        self.group_types.iter().any(CandidateGroupType::has_selection)
    }
}
